pub mod composer;
pub mod preferences;

pub use composer::Composer;
pub use preferences::Preferences;

pub enum Screen {
    Composer(Composer),
    Preferences(Preferences),
}
