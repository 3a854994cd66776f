use clap::Parser;
use std::path::PathBuf;

use crate::bundles::Expectations;
use crate::bundles::expectations::parse_edge;
use crate::config::DEFAULT_BUNDLES_PATH;

/// Arguments for the bundles command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the default document:\n    tmplguard bundles\n\n\
                  Validate another file:\n    tmplguard bundles --file templates/bundles.yml\n\n\
                  Require specific bundles and relations:\n    tmplguard bundles --expect-bundle core --expect-required core --expect-requires book:tests")]
pub struct BundlesArgs {
    /// Template bundles document
    #[arg(long, short = 'f', env = "TMPLGUARD_BUNDLES", default_value = DEFAULT_BUNDLES_PATH)]
    pub file: PathBuf,

    /// Fail unless a bundle with this name is defined
    #[arg(long = "expect-bundle", value_name = "NAME")]
    pub expect_bundles: Vec<String>,

    /// Fail unless bundle A lists bundle B under `requires`
    #[arg(long = "expect-requires", value_name = "A:B", value_parser = parse_edge)]
    pub expect_requires: Vec<(String, String)>,

    /// Fail unless the bundle is marked `required: true`
    #[arg(long = "expect-required", value_name = "NAME")]
    pub expect_required: Vec<String>,
}

impl BundlesArgs {
    /// Expectations requested on the command line
    pub fn expectations(&self) -> Expectations {
        Expectations {
            bundles: self.expect_bundles.clone(),
            requires: self.expect_requires.clone(),
            required: self.expect_required.clone(),
        }
    }
}
