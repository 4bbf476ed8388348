//! Print the conversion matrices for every supported color space so they can
//! be copied into a color library.

use std::process;

use bitflags::bitflags;
use clap::{Parser, ValueEnum};
use colormatrix::{
    derive_bradford, derive_oklab_d65, derive_rgb_xyz,
    format::{matrix, Style},
    Error, MatrixPair, RgbSpace, Transform, WhitePoint, D50, D65,
};
use log::*;

/// Decimals used for the RGB and adaptation sections unless overridden.
const RGB_PRECISION: usize = 17;
/// Decimals used for the Oklab section unless overridden.
const OKLAB_PRECISION: usize = 16;
/// Largest `forward * inverse - identity` entry accepted before warning.
const RESIDUAL_LIMIT: f64 = 1e-9;

bitflags! {
    /// Which groups of matrices to print.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Sections : u8 {
        const RGB = 1 << 0;
        const OKLAB = 1 << 1;
        const ADAPT = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Section {
    /// RGB to and from XYZ for each color space.
    Rgb,
    /// XYZ and linear sRGB to and from LMS, and LMS to and from Oklab.
    Oklab,
    /// Bradford adaptation from D65 to D50.
    Adapt,
}

impl From<Section> for Sections {
    fn from(value: Section) -> Self {
        match value {
            Section::Rgb => Sections::RGB,
            Section::Oklab => Sections::OKLAB,
            Section::Adapt => Sections::ADAPT,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Only print the RGB matrices of these color spaces
    /// (srgb, display-p3, a98-rgb, rec2020, prophoto-rgb).
    #[arg(value_name = "SPACE")]
    pub spaces: Vec<String>,

    /// Sections to print. Default: all.
    #[arg(long, value_enum, value_delimiter = ',', value_name = "section,...")]
    pub sections: Option<Vec<Section>>,

    /// Number of decimals for every entry.
    #[arg(short, long, value_name = "num")]
    pub precision: Option<usize>,

    /// Print `transform_3x3` constants instead of bracketed rows.
    #[arg(long, default_value = "false")]
    pub rust: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

impl CommandOptions {
    fn sections(&self) -> Sections {
        match &self.sections {
            Some(sections) => sections
                .iter()
                .fold(Sections::empty(), |acc, s| acc | Sections::from(*s)),
            None => Sections::all(),
        }
    }

    fn style(&self) -> Style {
        if self.rust {
            Style::Rust
        } else {
            Style::Rows
        }
    }
}

fn init_logger(opts: &CommandOptions) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[LevelFilter] = &[
            LevelFilter::Trace,
            LevelFilter::Debug,
            LevelFilter::Info,
            LevelFilter::Warn,
            LevelFilter::Error,
        ];
        builder.filter_level(LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize]);
    }

    builder
        .format_target(false)
        .format_module_path(false)
        .init();
}

struct Printer {
    precision: Option<usize>,
    style: Style,
}

impl Printer {
    fn header(&self, title: &str) {
        println!("===== {} =====", title);
    }

    fn print(&self, label: &str, transform: &Transform, default_precision: usize) {
        let precision = self.precision.unwrap_or(default_precision);
        println!("--- {} ---", label);
        println!("{}", matrix(transform, precision, self.style));
    }

    fn check(&self, name: &str, pair: &MatrixPair) {
        let residual = pair.residual();
        if pair.is_consistent(RESIDUAL_LIMIT) {
            debug!("{}: forward * inverse is identity within {:e}", name, residual);
        } else {
            warn!("{}: forward * inverse is off identity by {:e}", name, residual);
        }
    }
}

fn print_rgb(printer: &Printer, spaces: &[RgbSpace]) -> Result<(), Error> {
    for space in spaces {
        info!("Deriving {} against {}", space, space.white_point_name());
        let pair = derive_rgb_xyz(space.white_point()?, *space)?;
        printer.check(space.name(), &pair);

        printer.header(space.title());
        printer.print("rgb -> xyz", &pair.forward, RGB_PRECISION);
        printer.print("xyz -> rgb", &pair.inverse, RGB_PRECISION);
    }
    Ok(())
}

fn print_oklab(printer: &Printer) -> Result<(), Error> {
    info!("Deriving Oklab against {}", D65::NAME);
    let m = derive_oklab_d65()?;
    printer.check("srgb-linear <-> lms", &m.srgb_linear_to_lms);
    printer.check("xyz-d65 <-> lms", &m.xyz_to_lms);
    printer.check("lms^(1/3) <-> oklab", &m.lms_cbrt_to_oklab);

    printer.header("Oklab");
    printer.print("sRGB Linear -> lms", &m.srgb_linear_to_lms.forward, OKLAB_PRECISION);
    printer.print("lms -> sRGB Linear", &m.srgb_linear_to_lms.inverse, OKLAB_PRECISION);
    printer.print("XYZ D65 -> lms", &m.xyz_to_lms.forward, OKLAB_PRECISION);
    printer.print("lms -> XYZ D65", &m.xyz_to_lms.inverse, OKLAB_PRECISION);
    printer.print("lms ** 1/3 -> Oklab", &m.lms_cbrt_to_oklab.forward, OKLAB_PRECISION);
    printer.print("Oklab -> lms ** 1/3", &m.lms_cbrt_to_oklab.inverse, OKLAB_PRECISION);
    Ok(())
}

fn print_adapt(printer: &Printer) -> Result<(), Error> {
    info!("Deriving Bradford adaptation {} -> {}", D65::NAME, D50::NAME);
    let pair = derive_bradford(D65::tristimulus()?, D50::tristimulus()?)?;
    printer.check("bradford", &pair);

    printer.header("Bradford");
    printer.print("D65 -> D50", &pair.forward, RGB_PRECISION);
    printer.print("D50 -> D65", &pair.inverse, RGB_PRECISION);
    Ok(())
}

fn run(opts: &CommandOptions) -> Result<(), Error> {
    let spaces = if opts.spaces.is_empty() {
        RgbSpace::ALL.to_vec()
    } else {
        opts.spaces
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<RgbSpace>, Error>>()?
    };

    let printer = Printer {
        precision: opts.precision,
        style: opts.style(),
    };

    let sections = opts.sections();
    if sections.contains(Sections::RGB) {
        print_rgb(&printer, &spaces)?;
    }
    if sections.contains(Sections::OKLAB) {
        print_oklab(&printer)?;
    }
    if sections.contains(Sections::ADAPT) {
        print_adapt(&printer)?;
    }
    Ok(())
}

fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);

    if let Err(err) = run(&opts) {
        error!("{}", err);
        process::exit(1);
    }
}
