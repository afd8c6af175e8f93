use clap::{Args, Subcommand};

use crate::domain::{ComparisonMode, GenerationParams};

#[derive(Subcommand)]
pub enum Commands {
    /// Send one prompt and print the reply
    Chat {
        prompt: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Send the same prompt unrestricted and restricted, side by side
    Compare { prompt: String },

    /// Store the API key used for every request
    SetKey { key: String },

    /// Report whether an API key is stored
    KeyStatus,

    /// Remove the stored API key
    ClearKey,

    /// Show or change the parameters used by `compare`
    Settings {
        /// Which side of the comparison to change
        #[arg(long, default_value = "restricted")]
        mode: ComparisonMode,

        #[command(flatten)]
        params: ParamArgs,

        /// Clear a field (e.g. --unset stop --unset temperature)
        #[arg(long, value_name = "FIELD")]
        unset: Vec<String>,

        /// Restore the default settings for both modes
        #[arg(long, conflicts_with_all = ["unset"])]
        reset: bool,
    },
}

/// Generation parameters accepted on the command line. Flags left out stay
/// unset and are not sent.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Stop sequence; repeat for several
    #[arg(long)]
    pub stop: Vec<String>,

    #[arg(long)]
    pub temperature: Option<f64>,

    #[arg(long)]
    pub top_p: Option<f64>,

    #[arg(long)]
    pub top_k: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    pub frequency_penalty: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub presence_penalty: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Sent as a system message before the prompt
    #[arg(long)]
    pub format_instruction: Option<String>,
}

impl ParamArgs {
    pub fn to_params(&self) -> GenerationParams {
        let mut params = GenerationParams::new();
        params.set_max_tokens(self.max_tokens);
        params.set_stop((!self.stop.is_empty()).then(|| self.stop.clone()));
        params.set_temperature(self.temperature);
        params.set_top_p(self.top_p);
        params.set_top_k(self.top_k);
        params.set_frequency_penalty(self.frequency_penalty);
        params.set_presence_penalty(self.presence_penalty);
        params.set_seed(self.seed);
        params.set_format_instruction(self.format_instruction.clone());
        params
    }
}
