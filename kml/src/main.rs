use anyhow::Result;
use structopt::StructOpt;

use abstutil::Timer;

#[derive(StructOpt)]
#[structopt(
    name = "kml",
    about = "Writes the position of every placemark in a KML file as `[lat, lon], // name` lines"
)]
struct Flags {
    /// KML file to read
    #[structopt(long = "input")]
    pub input: String,

    /// Text file to write. Anything already there is replaced.
    #[structopt(long = "output")]
    pub output: String,

    /// Only keep the first placemark at each position, comparing coordinates rounded to 6
    /// decimal places
    #[structopt(long)]
    pub dedupe: bool,
}

fn main() -> Result<()> {
    let flags = Flags::from_args();
    abstutil::logger::setup();

    let mut timer = Timer::new("extracting coordinates from KML");
    kml::convert(&flags.input, &flags.output, flags.dedupe, &mut timer)?;
    Ok(())
}
