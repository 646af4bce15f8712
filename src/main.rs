use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use shift_calendar::config::Config;
use shift_calendar::generate_layout;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::str::FromStr;
    use std::error::Error;
    use std::path::PathBuf;

    use anyhow::Context as _;
    use log::error;
    use seahorse::Context;

    /// Seahorse actions can not return errors, so they are logged and the
    /// process exits with a failure code.
    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .ok()
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }

        /// Parses the flag if it has been passed.
        fn optional_flag<T>(&self, name: &str) -> Result<Option<T>, anyhow::Error>
        where
            T: FromStr,
            T::Err: Error + Send + Sync + 'static,
        {
            self.context()
                .string_flag(name)
                .ok()
                .map(|value| value.parse::<T>())
                .transpose()
                .with_context(|| format!("invalid value for flag \"{}\"", name))
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let schedule = context.required_path_flag("schedule")?;
    let settings = context.optional_flag::<PathBuf>("config")?;

    let mut config = Config::try_from_files(&schedule, settings.as_deref())?;

    if let Some(week_start) = context.optional_flag("week-start")? {
        config.week_start(week_start);
    }

    if let Some(utc_offset) = context.optional_flag("utc-offset")? {
        config.utc_offset(utc_offset);
    }

    if let Some(now) = context.optional_flag("now")? {
        config.now(now);
    }

    if let Some(output) = context.optional_flag::<PathBuf>("output")? {
        config.output(output);
    }

    if context.bool_flag("pad-trailing-row") {
        config.pad_trailing_row(true);
    }

    let config = config.build();

    info!("finished building config");

    Ok(config)
}

fn layout(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;

    if let Some(json) = generate_layout(&config)? {
        println!("{}", json);
    }

    Ok(())
}

fn details(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;

    for line in config.describe_details() {
        println!("{}", line);
    }

    Ok(())
}

fn with_common_flags(command: Command) -> Command {
    command
        .flag(
            Flag::new("schedule", FlagType::String)
                .description("Path to the schedule file (json, or toml with a `.toml` extension)."),
        )
        .flag(
            Flag::new("config", FlagType::String)
                .description("[optional] Path to the settings file."),
        )
        .flag(Flag::new("utc-offset", FlagType::String).description(
            "[optional] Offset of local time, like `+09:00`, `Z` or `local`. Default: `local`",
        ))
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let layout_command = with_common_flags(
        Command::new("layout")
            .usage(format!("{} layout [args]", args[0]))
            .description("Lays out the schedule as calendar weeks and prints them as json."),
    )
    .flag(Flag::new("week-start", FlagType::String).description(
        "[optional] The day each week starts with. Default: `sunday`",
    ))
    .flag(Flag::new("pad-trailing-row", FlagType::Bool).description(
        "[optional] Fills the last week with blank days. Default: false",
    ))
    .flag(Flag::new("output", FlagType::String).description(
        "[optional] Path to the output file. Default: prints to stdout",
    ))
    .action(|context: &Context| exit_on_error(layout(context)));

    let details_command = with_common_flags(
        Command::new("details")
            .usage(format!("{} details [args]", args[0]))
            .description("Lists the shifts and marks the one that is in progress."),
    )
    .flag(Flag::new("now", FlagType::String).description(
        "[optional] The current time in seconds since the unix epoch. Default: the system clock",
    ))
    .action(|context: &Context| exit_on_error(details(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(layout_command)
        .command(details_command);

    app.run(args);

    Ok(())
}
