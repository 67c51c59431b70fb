use clap::Parser;

use wakeline::error::{AppError, AppResult};

use super::ReplayArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<ReplayArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ReplayArgs::try_parse_from(args).map_err(AppError::from)
}
