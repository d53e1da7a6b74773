use anyhow::Context;
use clap::Parser;
use clio::ClioPath;
use dbstructs::DbStructsBuilder;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(name = "dbstructs", about = "Generate Go structs from a MySQL schema")]
struct Opt {
    /// Config file (JSON, or TOML with a .toml extension). Defaults apply when omitted.
    #[clap(long, short)]
    json: Option<PathBuf>,

    /// Output file, `-` for stdout
    #[clap(long, short, value_parser = clap::value_parser!(ClioPath), default_value = "-")]
    out: ClioPath,

    #[clap(long)]
    pkg_name: Option<String>,

    #[clap(long)]
    tag_label: Option<String>,

    #[clap(long)]
    db_name: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::parse();

    let mut builder = match &opt.json {
        Some(path) => DbStructsBuilder::from_config_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DbStructsBuilder::new(),
    };

    if let Some(name) = opt.pkg_name {
        builder = builder.package_name(name);
    }
    if let Some(label) = opt.tag_label {
        builder = builder.tag_label(label);
    }
    if let Some(name) = opt.db_name {
        builder = builder.db_name(name);
    }

    let to_stdout = opt.out.is_std();
    let written = builder
        .output(opt.out)
        .build()
        .await
        .context("generating structs")?;

    if !to_stdout {
        println!("Ok {}", written);
    }

    Ok(())
}
