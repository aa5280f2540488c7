mod cover_art;
mod seed;

pub use cover_art::cmd_apply_cover_art;
pub use seed::cmd_seed;
