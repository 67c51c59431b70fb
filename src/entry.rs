use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::Path;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use wakeline::error::AppResult;

use crate::app::run_replay;
use crate::args::{DEFAULT_CONFIG_FILES, ReplayArgs};

pub(crate) fn run() -> AppResult<()> {
    let Some((mut args, matches)) = parse_args()? else {
        return Ok(());
    };

    apply_config(&mut args, &matches)?;

    let interactive = is_interactive(&args);
    crate::logger::init_logging(args.verbose, args.no_color, interactive);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_replay(&args, interactive))
}

fn parse_args() -> AppResult<Option<(ReplayArgs, ArgMatches)>> {
    let mut cmd = ReplayArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = ReplayArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

fn apply_config(args: &mut ReplayArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn is_interactive(args: &ReplayArgs) -> bool {
    !args.no_ui && io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_is_shown_only_without_arguments() -> Result<(), String> {
        let with_flag = [OsString::from("wakeline"), OsString::from("--no-ui")];
        if should_show_help(&with_flag) {
            return Err("Arguments must suppress help".to_owned());
        }
        let bare = [OsString::from("wakeline")];
        if should_show_help(&bare) == has_default_config() {
            return Err("Bare invocation must show help unless a default config exists".to_owned());
        }
        Ok(())
    }
}
