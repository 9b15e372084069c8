use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    shapez-mod completions bash > ~/.bash_completion.d/shapez-mod\n\n\
                  Generate zsh completions:\n    shapez-mod completions zsh > ~/.zfunc/_shapez-mod\n\n\
                  Generate fish completions:\n    shapez-mod completions fish > ~/.config/fish/completions/shapez-mod.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
