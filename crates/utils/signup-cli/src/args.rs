//! Command-line arguments.

use std::path::PathBuf;

use lib_signup::FormSnapshot;

pub const USAGE: &str = "\
Usage: signup_cli <wallet_address> [--email EMAIL] [--twitter HANDLE] [--referral CODE] [--store PATH] [--open]

Environment:
  SIGNUP_API_BASE              API origin (default http://127.0.0.1:5000)
  SIGNUP_REDIRECT_DELAY_MS     Delay before the tasks page (default 2000)
  SIGNUP_SUCCESS_CLEAR_MS      Lifetime of the success message (default 5000)
  SIGNUP_REQUEST_TIMEOUT_SECS  Request timeout (default 10)
  RUST_LOG                     Log filter (default info)";

pub const DEFAULT_STORE_PATH: &str = "data/signup-store.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub wallet_address: String,
    pub email: String,
    pub twitter_handle: String,
    pub referral_code: String,
    pub store_path: PathBuf,
    pub open_browser: bool,
}

impl CliArgs {
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            wallet_address: self.wallet_address.clone(),
            email: self.email.clone(),
            twitter_handle: self.twitter_handle.clone(),
            referral_code: self.referral_code.clone(),
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut wallet_address = None;
    let mut email = String::new();
    let mut twitter_handle = String::new();
    let mut referral_code = String::new();
    let mut store_path = PathBuf::from(DEFAULT_STORE_PATH);
    let mut open_browser = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--email" => email = value_for(&arg, args.next())?,
            "--twitter" => twitter_handle = value_for(&arg, args.next())?,
            "--referral" => referral_code = value_for(&arg, args.next())?,
            "--store" => store_path = PathBuf::from(value_for(&arg, args.next())?),
            "--open" => open_browser = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {}", flag)),
            _ if wallet_address.is_none() => wallet_address = Some(arg),
            _ => return Err(format!("Unexpected argument: {}", arg)),
        }
    }

    Ok(CliArgs {
        wallet_address: wallet_address.ok_or_else(|| "Missing wallet address".to_string())?,
        email,
        twitter_handle,
        referral_code,
        store_path,
        open_browser,
    })
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{} needs a value", flag))
}
