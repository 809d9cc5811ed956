use std::{io::{BufWriter, Write},
          fs::File,
          error::Error,
          path::PathBuf};
use clap::Parser;
use log::info;
use palette_harmony::{try_parse_color, HarmonyColor, HslRange, Palette,
                      Scheme, RGB8};

type Err = Box<dyn Error>;

/// Render the palettes of a color as an HTML page of swatches.
#[derive(Parser, Debug)]
struct Args {
    /// Base color: #rrggbb, #rgb, rgb(r, g, b), hsl(h, s%, l%) or bare
    /// hex digits.  Empty text uses the color picker default.
    #[arg(default_value = "")]
    color: String,

    /// Harmony scheme (unknown names give triadic).  Without --scheme
    /// nor --range, all schemes are rendered.
    #[arg(long)]
    scheme: Option<String>,

    /// Sample a HSL grid around the hue of the color instead.
    #[arg(long, conflicts_with = "scheme")]
    range: bool,

    /// Degrees swept on each side of the base hue.
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    hue: i32,

    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    sat_min: i32,

    #[arg(long, default_value_t = 80, allow_negative_numbers = true)]
    sat_max: i32,

    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    light_min: i32,

    #[arg(long, default_value_t = 80, allow_negative_numbers = true)]
    light_max: i32,

    #[arg(short, long, default_value = "palette.html")]
    output: PathBuf,
}

/// Value of the color picker when the text field is left empty.
const PICKER_DEFAULT: &str = "#ff0000";

fn table_of_colors(fh: &mut impl Write, palette: &Palette,
                   comment: &str) -> Result<(), Err> {
    if palette.is_empty() {
        writeln!(fh, "<p style=\"color: #777\">No colors generated. \
                      ({comment})</p>")?;
        return Ok(())
    }
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 4px\"><tr>")?;
    for (c, label) in palette.iter().zip(palette.labels()) {
        writeln!(fh, "  <td style=\"width: 90px; height: 90px; \
                      vertical-align: bottom; font-family: monospace; \
                      color: {}; background-color: {}\">{label}</td>",
                 caption_color(*c), c.to_hex())?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

/// Black on light swatches, white on dark ones.
fn caption_color(c: RGB8) -> &'static str {
    if c.to_hsl().l > 55. { "#000" } else { "#fff" }
}

fn main() -> Result<(), Err> {
    env_logger::init();
    let args = Args::parse();
    let text = { let t = args.color.trim();
                 if t.is_empty() { PICKER_DEFAULT } else { t } };
    let base = try_parse_color(text)?;
    println!("{}", base.to_hex());

    let mut fh = BufWriter::new(File::create(&args.output)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Palettes of {}</title>\n\
                  </head>\n\
                  <body>",
             base.to_hex())?;
    if args.range {
        let range = HslRange::default()
            .hue_spread(args.hue)
            .saturation(args.sat_min, args.sat_max)
            .lightness(args.light_min, args.light_max);
        writeln!(fh, "<h3>Range</h3>")?;
        let comment = format!("hue ±{}, saturation {}% - {}%, \
                               lightness {}% - {}%",
                              args.hue, args.sat_min, args.sat_max,
                              args.light_min, args.light_max);
        table_of_colors(&mut fh, &base.range(&range), &comment)?;
    } else {
        let schemes = match &args.scheme {
            Some(name) => vec![Scheme::from_name(name)],
            None => Scheme::ALL.to_vec(),
        };
        writeln!(fh, "<h3>Schemes</h3>")?;
        for s in schemes {
            table_of_colors(&mut fh, &base.scheme(s), s.name())?;
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    info!("wrote {}", args.output.display());
    Ok(())
}
