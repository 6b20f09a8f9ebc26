use std::env;

use dictionary::DEFAULT_API_URL;

const DEFAULT_AUDIO_PLAYER: &str = "mpv";
const DEFAULT_AUDIO_PLAYER_ARGS: &str = "--no-video --really-quiet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the word is appended to, e.g. `.../api/v2/entries/en`.
    pub api_url: String,
    /// Program that receives pronunciation urls.
    pub audio_player: String,
    /// Arguments placed before the url.
    pub audio_player_args: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("DICTIONARY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let audio_player =
            var("AUDIO_PLAYER").unwrap_or_else(|| DEFAULT_AUDIO_PLAYER.to_string());

        let audio_player_args = split_args(
            &var("AUDIO_PLAYER_ARGS").unwrap_or_else(|| DEFAULT_AUDIO_PLAYER_ARGS.to_string()),
        );

        Config {
            api_url,
            audio_player,
            audio_player_args,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn split_args(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_point_at_the_public_api_and_mpv() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.audio_player, "mpv");
        assert_eq!(config.audio_player_args, vec!["--no-video", "--really-quiet"]);
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars = HashMap::from([
            ("DICTIONARY_API_URL", "http://localhost:8080/entries/en"),
            ("AUDIO_PLAYER", "ffplay"),
            ("AUDIO_PLAYER_ARGS", "  -nodisp   -autoexit "),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.api_url, "http://localhost:8080/entries/en");
        assert_eq!(config.audio_player, "ffplay");
        assert_eq!(config.audio_player_args, vec!["-nodisp", "-autoexit"]);
    }

    #[test]
    fn empty_player_args_mean_none() {
        let config = Config::from_lookup(|key| (key == "AUDIO_PLAYER_ARGS").then(String::new));

        assert!(config.audio_player_args.is_empty());
    }
}
