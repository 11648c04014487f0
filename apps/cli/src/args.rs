use std::env;

#[derive(Debug, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub fixtures: Option<String>,
}

pub fn parse_args() -> Result<CliArgs, String> {
    let mut args = env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --port".to_string())?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port value: {value}"))?;
                parsed.port = Some(port);
            }
            "--fixtures" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --fixtures".to_string())?;
                parsed.fixtures = Some(value);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        "Storage Console\n\n\
Usage:\n  storage-console [--port <port>] [--fixtures <dir>]\n\n\
Options:\n  --port <port>     Override the configured port for this run only\n  --fixtures <dir>  Override the receipt fixture directory\n  -h, --help        Show this help message\n"
    );
}
