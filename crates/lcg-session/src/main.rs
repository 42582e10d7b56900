use clap::{Arg, ArgAction, Command};
use lcg_session::{GenerateOutcome, Session};
use lcg_transport::{GenerationClient, TransportConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("lcg")
        .version(lcg_session::VERSION)
        .about("Live component generator: prompt to renderable JSX artifact")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generate one component artifact from a prompt")
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .required(true)
                        .help("What the component should be"),
                )
                .arg(
                    Arg::new("endpoint")
                        .long("endpoint")
                        .help("Chat-completions endpoint (default: OpenAI)"),
                )
                .arg(
                    Arg::new("model")
                        .long("model")
                        .help("Model identifier"),
                )
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .help("Upstream API key (falls back to LCG_API_KEY)"),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .action(ArgAction::SetTrue)
                        .help("Print the raw model text instead of the artifact"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the full render request as JSON"),
                ),
        );

    let matches = cli.get_matches();

    if let Some(args) = matches.subcommand_matches("generate") {
        let api_key = args
            .get_one::<String>("api-key")
            .cloned()
            .or_else(|| std::env::var("LCG_API_KEY").ok());
        let Some(api_key) = api_key else {
            eprintln!("error: no API key (use --api-key or set LCG_API_KEY)");
            std::process::exit(2);
        };

        let mut config = TransportConfig::new(api_key);
        if let Some(endpoint) = args.get_one::<String>("endpoint") {
            config = config.with_endpoint(endpoint);
        }
        if let Some(model) = args.get_one::<String>("model") {
            config = config.with_model(model);
        }

        let client = match GenerationClient::new(config) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        };

        let mut session = Session::new(client);
        session.set_prompt(args.get_one::<String>("prompt").cloned().unwrap_or_default());

        match session.generate().await {
            GenerateOutcome::Rendered(request) => {
                if args.get_flag("raw") {
                    println!("{}", session.state().raw_export().unwrap_or_default());
                } else if args.get_flag("json") {
                    match serde_json::to_string_pretty(&request) {
                        Ok(json) => println!("{json}"),
                        Err(e) => {
                            eprintln!("error: {e}");
                            std::process::exit(2);
                        }
                    }
                } else {
                    println!("{}", request.code);
                }
            }
            GenerateOutcome::Refused(gate) => {
                eprintln!("refused: {gate:?}");
                std::process::exit(1);
            }
        }
    }
}
