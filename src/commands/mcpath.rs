// Mcpath command for reading and changing the Minecraft install folder

use crate::commands::Context;
use crate::ui;
use log::info;

pub fn mcpath(ctx: &mut Context, set: Option<String>) -> anyhow::Result<()> {
    match set {
        Some(path) => {
            info!("Install path {} -> {}", ctx.settings.mc_install_path, path);
            ctx.settings.mc_install_path = path;
            ctx.save_settings()?;
            ui::success("Path updated.");
        }
        None => ui::line(&ctx.settings.mc_install_path),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::config::Settings;
    use tempfile::TempDir;

    #[test]
    fn test_set_path_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = testing::context(&temp_dir);

        mcpath(&mut ctx, Some("/srv/minecraft".to_string())).unwrap();

        assert_eq!(ctx.settings.mc_install_path, "/srv/minecraft");
        let saved = Settings::load(&ctx.settings_path).unwrap();
        assert_eq!(saved.mc_install_path, "/srv/minecraft");
    }

    #[test]
    fn test_print_path_leaves_settings_alone() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = testing::context(&temp_dir);

        mcpath(&mut ctx, None).unwrap();

        assert!(!ctx.settings_path.exists());
    }
}
