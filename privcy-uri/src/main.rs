use privcy_uri::{cli::PrivcyUriArgs, run};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logger::init();

    let args = PrivcyUriArgs::from_env()?;
    let output = run::run(&args)?;
    println!("{output}");
    Ok(())
}
