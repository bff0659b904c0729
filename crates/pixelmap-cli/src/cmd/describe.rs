// crates/pixelmap-cli/src/cmd/describe.rs

use clap::Args;

use crate::cmd::common::GenArgs;

#[derive(Args, Debug)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub gen: GenArgs,
}

pub fn run(args: DescribeArgs) -> anyhow::Result<()> {
    let gen = args.gen.build()?;

    eprintln!("--- describe ---");
    eprintln!("gen    = {}", gen.kind());
    eprintln!("width  = {}", gen.width());
    eprintln!("height = {}", gen.height());
    eprintln!("size   = {}", gen.size());

    println!("{}", gen.describe());
    Ok(())
}
