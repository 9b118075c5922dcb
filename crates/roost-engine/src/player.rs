use roost_types::{Track, UserProfile};

/// A one-track music player that never touches audio.
///
/// The player holds a single track and a playing flag; "playback" is
/// purely a state change the music screen renders.
#[derive(Debug, Clone)]
pub struct PlayerState {
    track: Track,
    playing: bool,
}

impl PlayerState {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            playing: false,
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip between playing and paused, returning the new state.
    ///
    /// Every transition into playing records the track title as a
    /// favorite on the profile, one entry per transition, duplicates
    /// included.
    pub fn toggle(&mut self, profile: &mut UserProfile) -> bool {
        self.playing = !self.playing;
        if self.playing {
            profile.add_favorite(&self.track.title);
        }
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_and_profile() -> (PlayerState, UserProfile) {
        let player = PlayerState::new(Track::new("Sample Song", "https://example.com/sample.mp3"));
        (player, UserProfile::new("You"))
    }

    #[test]
    fn test_player_starts_paused() {
        let (player, _) = player_and_profile();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_toggle_to_playing_records_one_favorite() {
        let (mut player, mut profile) = player_and_profile();
        assert!(player.toggle(&mut profile));
        assert_eq!(profile.favorite_songs, vec!["Sample Song"]);
    }

    #[test]
    fn test_toggle_to_paused_records_nothing() {
        let (mut player, mut profile) = player_and_profile();
        player.toggle(&mut profile);
        assert!(!player.toggle(&mut profile));
        assert_eq!(profile.favorite_songs.len(), 1);
    }

    #[test]
    fn test_each_play_adds_another_favorite_entry() {
        let (mut player, mut profile) = player_and_profile();
        for _ in 0..3 {
            player.toggle(&mut profile); // play
            player.toggle(&mut profile); // pause
        }
        assert_eq!(
            profile.favorite_songs,
            vec!["Sample Song", "Sample Song", "Sample Song"]
        );
    }
}
