use colored::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use chrono::Local;

pub struct Logger;

impl Logger {
    fn get_logs_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("logs")
    }

    fn get_log_file_name() -> PathBuf {
        let date = Local::now().format("%Y-%m-%d").to_string();
        Self::get_logs_dir().join(format!("bot-{}.log", date))
    }

    fn ensure_logs_dir() {
        let logs_dir = Self::get_logs_dir();
        if !logs_dir.exists() {
            let _ = fs::create_dir_all(&logs_dir);
        }
    }

    fn write_to_file(message: &str) {
        if let Err(_) = (|| -> std::io::Result<()> {
            Self::ensure_logs_dir();
            let log_file = Self::get_log_file_name();
            let timestamp = Local::now().to_rfc3339();
            let log_entry = format!("[{}] {}\n", timestamp, message);

            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            file.write_all(log_entry.as_bytes())?;
            Ok(())
        })() {
            // Silently fail to avoid infinite loops
        }
    }

    /// Shorten a bearer token for display so full credentials never reach
    /// the console or the log file. Tokens are opaque file input, so the
    /// prefix/suffix are taken per character, never at byte offsets.
    pub fn mask_token(token: &str) -> String {
        let char_count = token.chars().count();
        if char_count >= 14 {
            let prefix: String = token.chars().take(10).collect();
            let suffix: String = token.chars().skip(char_count - 4).collect();
            format!("{}...{}", prefix, suffix)
        } else {
            "*".repeat(char_count)
        }
    }

    pub fn header(title: &str) {
        println!("\n{}", "━".repeat(70).cyan());
        println!("{}", format!("  {}", title).cyan().bold());
        println!("{}\n", "━".repeat(70).cyan());
        Self::write_to_file(&format!("HEADER: {}", title));
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
        Self::write_to_file(&format!("INFO: {}", message));
    }

    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
        Self::write_to_file(&format!("SUCCESS: {}", message));
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
        Self::write_to_file(&format!("WARNING: {}", message));
    }

    pub fn error(message: &str) {
        println!("{} {}", "✗".red(), message);
        Self::write_to_file(&format!("ERROR: {}", message));
    }

    pub fn startup(token_count: usize, token_file: &str, api_base_url: &str) {
        println!("\n");
        let sail_lines = vec![
            "                |",
            "               /|",
            "              / |\\",
            "             /  | \\",
            "            /   |  \\",
            "           /____|___\\",
            "       _____________|____",
            "       \\                /",
            "  ~~~~~~\\______________/~~~~~~",
        ];
        for line in sail_lines {
            println!("{}", line.cyan());
        }
        println!("{}", "        PARASAIL AUTO CHECK-IN\n".cyan().bold());

        println!("{}", "━".repeat(70).cyan());
        println!("{}", "⛵ Accounts:".cyan());
        println!(
            "{}",
            format!("   {} token(s) loaded from {}", token_count, token_file).bright_black()
        );
        println!("{}", "\n🌐 Endpoint:".cyan());
        println!("{}", format!("   {}\n", api_base_url).bright_black());

        Self::write_to_file(&format!(
            "STARTUP: {} token(s) from {} | endpoint {}",
            token_count, token_file, api_base_url
        ));
    }

    pub fn separator() {
        println!("{}", "─".repeat(70).bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_token_keeps_prefix_and_suffix() {
        let masked = Logger::mask_token("eyJhbGciOiJIUzI1NiJ9.payload.signature");
        assert_eq!(masked, "eyJhbGciOi...ture");
        assert!(!masked.contains("payload"));
    }

    #[test]
    fn mask_token_hides_short_tokens_entirely() {
        assert_eq!(Logger::mask_token("short"), "*****");
    }

    #[test]
    fn mask_token_handles_multibyte_tokens() {
        // 15 bytes but only 5 characters; must not panic on a byte slice
        assert_eq!(Logger::mask_token("€€€€€"), "*****");
        assert_eq!(
            Logger::mask_token("токен-узла-парасаил-2024"),
            "токен-узла...2024"
        );
    }
}
