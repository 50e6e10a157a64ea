use std::path::PathBuf;

const DEFAULT_FLIGHTS_FILE: &str = "flights.txt";
const DEFAULT_LOG_DIR: &str = "logs";

/// Runtime settings of the fleet manager, taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub flights_file: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            flights_file: PathBuf::from(DEFAULT_FLIGHTS_FILE),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl Config {
    /// Builds the configuration from the program arguments.
    ///
    /// # Usage
    ///
    /// ```sh
    /// fleet-manager [flights_file] [log_dir]
    /// ```
    ///
    /// `args` includes the program name as its first element, as returned by
    /// `std::env::args()`.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.len() > 3 {
            return Err("Usage: fleet-manager [flights_file] [log_dir]".to_string());
        }

        let mut config = Config::default();
        if let Some(flights_file) = args.get(1) {
            config.flights_file = PathBuf::from(flights_file);
        }
        if let Some(log_dir) = args.get(2) {
            config.log_dir = PathBuf::from(log_dir);
        }
        Ok(config)
    }
}
