use clap::{CommandFactory, Parser};
use kubecomplete::{self, determine_context, determine_namespace};

#[derive(Debug, Parser)]
#[command(
    name = "kubecomplete-clap",
    about = "Showcase dynamic resource completion support"
)]
struct Cli {
    #[arg(short, long, add = kubecomplete::namespace_value_completer())]
    /// Please type the namespace you want to target.
    namespace: Option<String>,

    #[arg(add = kubecomplete::resource_type_value_completer())]
    /// Please type the resource type, e.g. `pods` or `deploy`.
    resource_type: String,

    #[arg(long = "pod", add = kubecomplete::resource_name_value_completer("pods", None))]
    /// Please type a pod name. Always completes pods, whatever the resource type above is.
    pod_name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    kubecomplete::clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let context = determine_context(&None)?;
    let namespace = determine_namespace(cli.namespace, &context);
    println!(
        "context={context} namespace={namespace} type={} pod={}",
        cli.resource_type,
        cli.pod_name.unwrap_or_default()
    );
    Ok(())
}
