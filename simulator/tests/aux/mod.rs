pub mod battle;
pub mod cards;

#[allow(unused)]
pub use battle::*;
#[allow(unused)]
pub use cards::*;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
