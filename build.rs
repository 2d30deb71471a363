use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build target and git revision end up in `daemonconf --version`.
    vergen_gitcl::Emitter::default()
        .add_instructions(
            &vergen_gitcl::CargoBuilder::default()
                .target_triple(true)
                .build()?,
        )?
        .add_instructions(&vergen_gitcl::GitclBuilder::default().sha(true).build()?)?
        .emit()?;
    Ok(())
}
