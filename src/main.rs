//! Command-line front end for the utilkit helpers.
//!
//! Formatting defaults come from `--config <file>` or the `UTILKIT_*`
//! environment variables. Set `RUST_LOG` for diagnostics on stderr.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use utilkit::{
    b64_decode_unicode, b64_encode_unicode, convert_phone_to_e164, convert_timestamp_to_date_time,
    convert_to_date, convert_to_money, deep_copy, replace_special_chars, split_full_name,
    validate_email, validate_name, validate_number, validate_password, validate_phone, Config,
    Currency, DateTimeFormat, Locale, MonthStyle, Value,
};

#[derive(Parser)]
#[command(name = "utilkit")]
#[command(about = "Formatting, encoding and validation helpers")]
struct Cli {
    /// JSON config file (falls back to UTILKIT_* environment variables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a phone number to E.164
    Phone {
        phone: String,

        /// Calling code for national numbers (e.g., 33)
        #[arg(long)]
        country_code: Option<u16>,
    },

    /// Base64-encode UTF-8 text
    B64Encode { text: String },

    /// Decode base64 into UTF-8 text
    B64Decode { encoded: String },

    /// Render a timestamp as YYYY-MM-DD HH:mm:ss
    Datetime {
        #[arg(allow_hyphen_values = true)]
        timestamp: i64,

        /// Date only
        #[arg(long)]
        short: bool,

        #[arg(long, default_value = "-")]
        date_separator: String,

        #[arg(long, default_value = ":")]
        time_separator: String,
    },

    /// Render a timestamp as a localized date
    Date {
        #[arg(allow_hyphen_values = true)]
        timestamp: Option<i64>,

        #[arg(long)]
        locale: Option<Locale>,

        #[arg(long, value_enum, default_value_t = MonthArg::Numeric)]
        month: MonthArg,

        /// Two-digit year
        #[arg(long)]
        short_year: bool,
    },

    /// Render an amount as localized currency
    Money {
        #[arg(allow_hyphen_values = true)]
        amount: f64,

        #[arg(long)]
        locale: Option<Locale>,

        #[arg(long)]
        currency: Option<Currency>,
    },

    /// Strip accents and punctuation
    Slug { text: String },

    /// Split a full name into surname and given name (JSON)
    Name { full_name: String },

    /// Check a value; exits with status 1 when invalid
    Validate {
        #[arg(value_enum)]
        kind: ValidateKind,

        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Lower bound for `number`
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,

        /// Upper bound for `number`
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,
    },

    /// Read JSON from stdin and print a deep copy
    DeepCopy,
}

#[derive(Clone, Copy, ValueEnum)]
enum MonthArg {
    Numeric,
    TwoDigit,
    Long,
    Short,
}

impl From<MonthArg> for MonthStyle {
    fn from(arg: MonthArg) -> Self {
        match arg {
            MonthArg::Numeric => Self::Numeric,
            MonthArg::TwoDigit => Self::TwoDigit,
            MonthArg::Long => Self::Long,
            MonthArg::Short => Self::Short,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ValidateKind {
    Email,
    Name,
    Number,
    Password,
    Phone,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::from_env(),
    };
    tracing::debug!(?config, "resolved config");

    match cli.command {
        Commands::Phone {
            phone,
            country_code,
        } => {
            let code = country_code.unwrap_or(config.default_country_code);
            println!("{}", convert_phone_to_e164(&phone, code));
        }
        Commands::B64Encode { text } => println!("{}", b64_encode_unicode(&text)),
        Commands::B64Decode { encoded } => {
            let decoded = b64_decode_unicode(&encoded).context("Failed to decode base64 input")?;
            println!("{}", decoded);
        }
        Commands::Datetime {
            timestamp,
            short,
            date_separator,
            time_separator,
        } => {
            let mut options = config.date_time_options()?;
            options.format = if short {
                DateTimeFormat::Short
            } else {
                DateTimeFormat::Long
            };
            options.date_separator = date_separator;
            options.time_separator = time_separator;

            let rendered = convert_timestamp_to_date_time(timestamp, &options)
                .with_context(|| format!("Cannot render timestamp {}", timestamp))?;
            println!("{}", rendered);
        }
        Commands::Date {
            timestamp,
            locale,
            month,
            short_year,
        } => {
            let mut format = config.date_format()?;
            if let Some(locale) = locale {
                format.locale = locale;
            }
            format.month = month.into();
            println!("{}", convert_to_date(timestamp, short_year, Some(&format)));
        }
        Commands::Money {
            amount,
            locale,
            currency,
        } => {
            let mut format = config.money_format();
            if let Some(locale) = locale {
                format.locale = locale;
            }
            if let Some(currency) = currency {
                format.currency = currency;
            }
            println!("{}", convert_to_money(Some(amount), Some(&format)));
        }
        Commands::Slug { text } => println!("{}", replace_special_chars(&text)),
        Commands::Name { full_name } => {
            let name = split_full_name(&full_name);
            println!("{}", serde_json::to_string(&name)?);
        }
        Commands::Validate {
            kind,
            value,
            min,
            max,
        } => {
            let valid = match kind {
                ValidateKind::Email => validate_email(&value),
                ValidateKind::Name => validate_name(&value),
                ValidateKind::Number => validate_number(&value, min, max),
                ValidateKind::Password => validate_password(&value),
                ValidateKind::Phone => validate_phone(&value),
            };
            println!("{}", valid);
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::DeepCopy => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            let json: serde_json::Value =
                serde_json::from_str(&input).context("Input is not valid JSON")?;
            let copy = deep_copy(&Value::from(json));
            println!("{}", copy);
        }
    }

    Ok(())
}
