use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    tmplguard completions bash > ~/.bash_completion.d/tmplguard\n\n\
                  Generate zsh completions:\n    tmplguard completions zsh > ~/.zfunc/_tmplguard\n\n\
                  Generate fish completions:\n    tmplguard completions fish > ~/.config/fish/completions/tmplguard.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
