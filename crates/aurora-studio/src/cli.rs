use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "aurora")]
#[command(about = "Animated wave background with a keyboard/mouse menu", long_about = None)]
pub struct Cli {
    /// Window title
    #[arg(long, default_value = "Aurora")]
    pub title: String,

    /// Initial window width, logical px
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height, logical px
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    pub log: Option<String>,

    /// Render one background frame on the CPU to this PNG and exit
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Time uniform for the snapshot, seconds
    #[arg(long, default_value_t = 0.0)]
    pub snapshot_time: f32,

    /// Snapshot width, px
    #[arg(long, default_value_t = 1280)]
    pub snapshot_width: u32,

    /// Snapshot height, px
    #[arg(long, default_value_t = 720)]
    pub snapshot_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_a_window() {
        let cli = Cli::parse_from(["aurora"]);
        assert_eq!(cli.title, "Aurora");
        assert_eq!((cli.width, cli.height), (1280.0, 720.0));
        assert!(cli.snapshot.is_none());
        assert!(cli.log.is_none());
    }

    #[test]
    fn snapshot_flags_parse() {
        let cli = Cli::parse_from([
            "aurora",
            "--snapshot",
            "out.png",
            "--snapshot-time",
            "3.5",
            "--snapshot-width",
            "320",
            "--snapshot-height",
            "200",
        ]);
        assert_eq!(cli.snapshot, Some(PathBuf::from("out.png")));
        assert_eq!(cli.snapshot_time, 3.5);
        assert_eq!((cli.snapshot_width, cli.snapshot_height), (320, 200));
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
