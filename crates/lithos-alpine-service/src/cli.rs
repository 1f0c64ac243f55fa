// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::path::PathBuf;

use clap::Parser;
use lithos_alpine_hbs::ViewOptions;

#[derive(Parser, Debug)]
#[command(name = "alpine-stdio", version)]
#[command(about = "Renders Handlebars views with the Alpine.js helpers over stdin/stdout")]
pub struct Config {
    /// Views directory containing the `layouts/` and `partials/` directories
    #[arg(short, long, env = "ALPINE_VIEWS", default_value = "views")]
    pub views: PathBuf,

    /// Layout in the layouts directory used when a request names none
    #[arg(long, env = "ALPINE_MAIN_LAYOUT", default_value = "main.hbs")]
    pub main: String,

    /// Debug logging for the service and view engine
    #[arg(long, env = "ALPINE_VERBOSE")]
    pub verbose: bool,
}

impl Config {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions::new(&self.views).with_default_layout(&self.main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = Config::try_parse_from(["alpine-stdio"]).unwrap();
        let options = config.view_options();
        assert_eq!(options.views_dir, PathBuf::from("views"));
        assert_eq!(options.partials_dir, PathBuf::from("views/partials"));
        assert_eq!(options.default_layout, "main.hbs");
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::try_parse_from(["alpine-stdio", "-v", "site", "--main", "admin", "--verbose"])
                .unwrap();
        assert_eq!(config.views, PathBuf::from("site"));
        assert_eq!(config.view_options().layouts_dir, PathBuf::from("site/layouts"));
        assert_eq!(config.main, "admin");
        assert!(config.verbose);
    }
}
