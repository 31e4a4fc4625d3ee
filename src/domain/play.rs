//! Outbound links to the hosted game.

pub const DEFAULT_PLAY_BASE_URL: &str = "https://react-mate--two.vercel.app";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayMode {
    Ai,
    Local,
    Online,
}

impl PlayMode {
    pub const ALL: [PlayMode; 3] = [PlayMode::Ai, PlayMode::Local, PlayMode::Online];

    pub fn title(self) -> &'static str {
        match self {
            PlayMode::Ai => "Play vs AI",
            PlayMode::Local => "Play Locally",
            PlayMode::Online => "Play Online",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PlayMode::Ai => "Challenge our sophisticated chess AI at various difficulty levels",
            PlayMode::Local => "Play chess with a friend on the same device, taking turns",
            PlayMode::Online => "Challenge players from around the world in online matches",
        }
    }

    pub fn features(self) -> [&'static str; 4] {
        match self {
            PlayMode::Ai => [
                "Multiple difficulty levels",
                "Instant play, no waiting",
                "Analyze your moves with evaluation",
                "Perfect for practice and learning",
            ],
            PlayMode::Local => [
                "No account required",
                "Pass-and-play format",
                "Auto-flip board option",
                "Great for teaching chess",
            ],
            PlayMode::Online => [
                "Quick matchmaking",
                "Live chess ratings",
                "Chat with opponents",
                "Save and share games",
            ],
        }
    }

    /// Last path segment on the hosted app
    pub fn slug(self) -> &'static str {
        match self {
            PlayMode::Ai => "ai",
            PlayMode::Local => "offline",
            PlayMode::Online => "online",
        }
    }

    pub fn url(self, base: &str) -> String {
        format!("{}/play/{}", base.trim_end_matches('/'), self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        assert_eq!(
            PlayMode::Ai.url(DEFAULT_PLAY_BASE_URL),
            "https://react-mate--two.vercel.app/play/ai"
        );
        assert_eq!(
            PlayMode::Local.url(DEFAULT_PLAY_BASE_URL),
            "https://react-mate--two.vercel.app/play/offline"
        );
        assert_eq!(
            PlayMode::Online.url(DEFAULT_PLAY_BASE_URL),
            "https://react-mate--two.vercel.app/play/online"
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(
            PlayMode::Online.url("http://localhost:3000//"),
            "http://localhost:3000/play/online"
        );
    }
}
