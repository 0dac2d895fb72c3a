use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    elementary_extension completions bash > ~/.bash_completion.d/elementary_extension\n\n\
                  Generate zsh completions:\n    elementary_extension completions zsh > ~/.zfunc/_elementary_extension\n\n\
                  Generate fish completions:\n    elementary_extension completions fish > ~/.config/fish/completions/elementary_extension.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
