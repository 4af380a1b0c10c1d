use clap::Parser;
use clap_complete::Shell;

use crate::settings::Settings;

/// matrix + DSP + RF + PQC pipeline latency explorer
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// extra config files, layered over configs/default.toml in order
    pub config_names: Vec<String>,

    /// square matrix size N (N x N)
    #[clap(long)]
    pub matrix_size: Option<usize>,

    /// DSP moving-average window
    #[clap(long)]
    pub dsp_window: Option<usize>,

    /// RF link bandwidth in Mb/s
    #[clap(long)]
    pub rf_bandwidth_mbps: Option<f64>,

    /// random seed for input generation
    #[clap(long)]
    pub seed: Option<u64>,

    /// run every scenario config matching this glob instead of a single run;
    /// the override flags above apply to every scenario
    #[clap(long)]
    pub sweep: Option<String>,

    /// print the report as json
    #[clap(long)]
    pub json: bool,

    /// debug level logging
    #[clap(short, long)]
    pub verbose: bool,

    /// print a completion script for the given shell and exit
    #[clap(long = "generate", arg_enum)]
    pub generator: Option<Shell>,
}

impl Args {
    /// command line values win over config files
    pub fn apply(&self, settings: &mut Settings) {
        let system = &mut settings.system;
        if let Some(matrix_size) = self.matrix_size {
            system.matrix_size = matrix_size;
        }
        if let Some(dsp_window) = self.dsp_window {
            system.dsp_window = dsp_window;
        }
        if let Some(rf_bandwidth_mbps) = self.rf_bandwidth_mbps {
            system.rf_bandwidth_mbps = rf_bandwidth_mbps;
        }
        if let Some(seed) = self.seed {
            system.seed = seed;
        }
    }
}
