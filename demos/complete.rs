use clap::Parser;
use kubecomplete::{Completer, client_for_context, determine_context, determine_namespace};
use tracing_subscriber::EnvFilter;

/// Print completion candidates for `<type> <name>` arguments, one per line.
#[derive(Debug, Parser)]
#[command(name = "kubecomplete")]
struct Cli {
    /// Kubernetes context to use instead of the current one.
    #[arg(long)]
    context: Option<String>,

    /// Namespace to list names in.
    #[arg(short, long)]
    namespace: Option<String>,

    /// Complete a flag value naming an instance of this resource, cluster-wide.
    #[arg(long, value_name = "RESOURCE")]
    flag: Option<String>,

    /// The word being typed.
    #[arg(long, default_value = "")]
    current: String,

    /// Print the resolved address of the resource type as JSON instead of completing.
    #[arg(long)]
    resolve: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Arguments typed so far.
    args: Vec<String>,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "kubecomplete=debug"
    } else {
        "kubecomplete=warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let context = determine_context(&cli.context)?;
    let namespace = determine_namespace(cli.namespace, &context);
    let completer = Completer::new(client_for_context(Some(&context)).await?);

    if cli.resolve {
        let token = cli
            .args
            .first()
            .ok_or_else(|| anyhow::anyhow!("a resource type is required"))?;
        let address = completer
            .resolve(token, kubecomplete::discover::DiscoveryScope::All)
            .await?;
        println!("{}", serde_json::to_string_pretty(&address)?);
        return Ok(());
    }

    let candidates = match &cli.flag {
        Some(resource) => completer.flag_complete(resource, &cli.current).await?,
        None => {
            completer
                .complete(Some(namespace.as_str()), cli.args.as_slice(), &cli.current)
                .await?
        }
    };

    for candidate in candidates {
        println!("{candidate}");
    }
    Ok(())
}
