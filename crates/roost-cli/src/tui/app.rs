use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use roost_engine::AppState;
use uuid::Uuid;

use crate::types::Tab;

/// Which buffer insert-mode keystrokes land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertTarget {
    /// The Home tab's post composer
    Post,
    /// The comment composer of one specific post
    Comment(Uuid),
    /// The Chat tab's message composer
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Insert(InsertTarget),
}

/// Screen-side state: which tab is up, what is selected, and where
/// typed characters go. Everything the posts themselves own (records,
/// comment drafts) lives in [`AppState`] instead.
pub(crate) struct UiState {
    pub active_tab: Tab,
    pub input_mode: InputMode,
    pub feed_list: ListState,
    pub post_draft: String,
    pub chat_draft: String,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(tab: Tab) -> Self {
        let mut feed_list = ListState::default();
        feed_list.select(Some(0));

        Self {
            active_tab: tab,
            input_mode: InputMode::Normal,
            feed_list,
            post_draft: String::new(),
            chat_draft: String::new(),
            should_quit: false,
        }
    }

    pub fn selected_post_id(&self, state: &AppState) -> Option<Uuid> {
        let index = self.feed_list.selected()?;
        state.feed.posts().get(index).map(|p| p.id)
    }

    pub fn on_key(&mut self, code: KeyCode, state: &mut AppState) {
        match self.input_mode {
            InputMode::Insert(target) => self.on_insert_key(target, code, state),
            InputMode::Normal => self.on_normal_key(code, state),
        }
    }

    fn on_insert_key(&mut self, target: InsertTarget, code: KeyCode, state: &mut AppState) {
        match code {
            // Leaving insert mode keeps whatever was typed; the draft is
            // still there when the composer reopens
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => self.submit(target, state),
            KeyCode::Backspace => match target {
                InsertTarget::Post => {
                    self.post_draft.pop();
                }
                InsertTarget::Chat => {
                    self.chat_draft.pop();
                }
                InsertTarget::Comment(id) => state.feed.pop_draft_char(id),
            },
            KeyCode::Char(c) => match target {
                InsertTarget::Post => self.post_draft.push(c),
                InsertTarget::Chat => self.chat_draft.push(c),
                InsertTarget::Comment(id) => state.feed.push_draft_char(id, c),
            },
            _ => {}
        }
    }

    // A draft that trims to nothing submits nothing: stay in insert mode
    // with the draft as typed
    fn submit(&mut self, target: InsertTarget, state: &mut AppState) {
        match target {
            InsertTarget::Post => {
                if state.submit_post(&self.post_draft).is_some() {
                    self.post_draft.clear();
                    self.input_mode = InputMode::Normal;
                    self.feed_list
                        .select(Some(state.feed.len().saturating_sub(1)));
                }
            }
            InsertTarget::Chat => {
                if state.send_message(&self.chat_draft).is_some() {
                    self.chat_draft.clear();
                    self.input_mode = InputMode::Normal;
                }
            }
            InsertTarget::Comment(id) => {
                if state.submit_comment(id).is_some() {
                    self.input_mode = InputMode::Normal;
                }
            }
        }
    }

    fn on_normal_key(&mut self, code: KeyCode, state: &mut AppState) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.previous(),
            KeyCode::Char('1') => self.active_tab = Tab::Home,
            KeyCode::Char('2') => self.active_tab = Tab::Chat,
            KeyCode::Char('3') => self.active_tab = Tab::Music,
            _ => match self.active_tab {
                Tab::Home => self.on_home_key(code, state),
                Tab::Chat => self.on_chat_key(code),
                Tab::Music => self.on_music_key(code, state),
            },
        }
    }

    fn on_home_key(&mut self, code: KeyCode, state: &mut AppState) {
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(state.feed.len()),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('p') => self.input_mode = InputMode::Insert(InsertTarget::Post),
            KeyCode::Char('a') => {
                if let Some(id) = self.selected_post_id(state) {
                    // Composing a comment needs the thread on screen
                    if !state.feed.post(id).map(|p| p.comments_open).unwrap_or(false) {
                        state.feed.toggle_comments(id);
                    }
                    self.input_mode = InputMode::Insert(InsertTarget::Comment(id));
                }
            }
            KeyCode::Char('l') => {
                if let Some(id) = self.selected_post_id(state) {
                    state.feed.toggle_like(id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_post_id(state) {
                    state.feed.toggle_dislike(id);
                }
            }
            KeyCode::Char('c') => {
                if let Some(id) = self.selected_post_id(state) {
                    state.feed.toggle_comments(id);
                }
            }
            KeyCode::Char('r') => {
                if let Some(id) = self.selected_post_id(state) {
                    state.feed.toggle_repost(id);
                }
            }
            KeyCode::Char('s') => {
                if let Some(id) = self.selected_post_id(state) {
                    state.feed.share(id);
                }
            }
            KeyCode::Char('b') => {
                if let Some(id) = self.selected_post_id(state) {
                    let _ = state.toggle_bookmark(id);
                }
            }
            _ => {}
        }
    }

    fn on_chat_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('i') {
            self.input_mode = InputMode::Insert(InsertTarget::Chat);
        }
    }

    fn on_music_key(&mut self, code: KeyCode, state: &mut AppState) {
        if code == KeyCode::Char(' ') {
            state.toggle_playback();
        }
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.feed_list.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.feed_list.select(Some(next));
    }

    fn select_previous(&mut self) {
        let previous = match self.feed_list.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.feed_list.select(Some(previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (UiState, AppState) {
        (UiState::new(Tab::Home), AppState::sample())
    }

    fn type_str(ui: &mut UiState, state: &mut AppState, text: &str) {
        for c in text.chars() {
            ui.on_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn test_q_quits() {
        let (mut ui, mut state) = fresh();
        ui.on_key(KeyCode::Char('q'), &mut state);
        assert!(ui.should_quit);
    }

    #[test]
    fn test_esc_quits_from_normal_mode() {
        let (mut ui, mut state) = fresh();
        ui.on_key(KeyCode::Esc, &mut state);
        assert!(ui.should_quit);
    }

    #[test]
    fn test_tab_key_cycles_tabs() {
        let (mut ui, mut state) = fresh();
        ui.on_key(KeyCode::Tab, &mut state);
        assert_eq!(ui.active_tab, Tab::Chat);
        ui.on_key(KeyCode::BackTab, &mut state);
        assert_eq!(ui.active_tab, Tab::Home);
    }

    #[test]
    fn test_digit_keys_jump_to_tabs() {
        let (mut ui, mut state) = fresh();
        ui.on_key(KeyCode::Char('3'), &mut state);
        assert_eq!(ui.active_tab, Tab::Music);
        ui.on_key(KeyCode::Char('2'), &mut state);
        assert_eq!(ui.active_tab, Tab::Chat);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let (mut ui, mut state) = fresh();
        assert_eq!(ui.feed_list.selected(), Some(0));
        ui.on_key(KeyCode::Char('j'), &mut state);
        assert_eq!(ui.feed_list.selected(), Some(1));
        ui.on_key(KeyCode::Char('j'), &mut state);
        assert_eq!(ui.feed_list.selected(), Some(1));
        ui.on_key(KeyCode::Char('k'), &mut state);
        ui.on_key(KeyCode::Char('k'), &mut state);
        assert_eq!(ui.feed_list.selected(), Some(0));
    }

    #[test]
    fn test_composing_a_post_appends_it_and_clears_the_draft() {
        let (mut ui, mut state) = fresh();
        let before = state.feed.len();

        ui.on_key(KeyCode::Char('p'), &mut state);
        type_str(&mut ui, &mut state, "my first post");
        ui.on_key(KeyCode::Enter, &mut state);

        assert_eq!(state.feed.len(), before + 1);
        let post = state.feed.posts().last().unwrap();
        assert_eq!(post.body, "my first post");
        assert_eq!(post.author, "User");
        assert!(ui.post_draft.is_empty());
        assert_eq!(ui.input_mode, InputMode::Normal);
        assert_eq!(ui.feed_list.selected(), Some(before));
    }

    #[test]
    fn test_blank_post_submit_is_a_no_op() {
        let (mut ui, mut state) = fresh();
        let before = state.feed.len();

        ui.on_key(KeyCode::Char('p'), &mut state);
        type_str(&mut ui, &mut state, "   ");
        ui.on_key(KeyCode::Enter, &mut state);

        assert_eq!(state.feed.len(), before);
        assert_eq!(ui.post_draft, "   ");
        assert_eq!(ui.input_mode, InputMode::Insert(InsertTarget::Post));
    }

    #[test]
    fn test_escape_keeps_the_post_draft_for_later() {
        let (mut ui, mut state) = fresh();

        ui.on_key(KeyCode::Char('p'), &mut state);
        type_str(&mut ui, &mut state, "half a thought");
        ui.on_key(KeyCode::Esc, &mut state);

        assert_eq!(ui.input_mode, InputMode::Normal);
        assert_eq!(ui.post_draft, "half a thought");
        assert!(!ui.should_quit);
    }

    #[test]
    fn test_backspace_edits_the_post_draft() {
        let (mut ui, mut state) = fresh();
        ui.on_key(KeyCode::Char('p'), &mut state);
        type_str(&mut ui, &mut state, "oops");
        ui.on_key(KeyCode::Backspace, &mut state);
        assert_eq!(ui.post_draft, "oop");
    }

    #[test]
    fn test_like_and_dislike_flip_independently() {
        let (mut ui, mut state) = fresh();
        let id = ui.selected_post_id(&state).unwrap();

        ui.on_key(KeyCode::Char('l'), &mut state);
        assert!(state.feed.post(id).unwrap().liked);
        assert!(!state.feed.post(id).unwrap().disliked);

        ui.on_key(KeyCode::Char('d'), &mut state);
        assert!(state.feed.post(id).unwrap().liked);
        assert!(state.feed.post(id).unwrap().disliked);

        ui.on_key(KeyCode::Char('l'), &mut state);
        assert!(!state.feed.post(id).unwrap().liked);
        assert!(state.feed.post(id).unwrap().disliked);
    }

    #[test]
    fn test_actions_land_on_the_selected_post() {
        let (mut ui, mut state) = fresh();
        ui.on_key(KeyCode::Char('j'), &mut state);
        let id = ui.selected_post_id(&state).unwrap();

        ui.on_key(KeyCode::Char('l'), &mut state);
        assert!(state.feed.post(id).unwrap().liked);
        assert!(!state.feed.posts()[0].liked);
    }

    #[test]
    fn test_repost_share_and_bookmark_keys() {
        let (mut ui, mut state) = fresh();
        let id = ui.selected_post_id(&state).unwrap();

        ui.on_key(KeyCode::Char('r'), &mut state);
        ui.on_key(KeyCode::Char('s'), &mut state);
        ui.on_key(KeyCode::Char('b'), &mut state);

        let post = state.feed.post(id).unwrap();
        assert!(post.reposted);
        assert_eq!(post.repost_count, 1);
        assert_eq!(post.share_count, 1);
        assert!(state.profile.is_bookmarked(id));
    }

    #[test]
    fn test_comment_flow_opens_thread_types_and_submits() {
        let (mut ui, mut state) = fresh();
        let id = ui.selected_post_id(&state).unwrap();
        assert!(!state.feed.post(id).unwrap().comments_open);

        ui.on_key(KeyCode::Char('a'), &mut state);
        assert!(state.feed.post(id).unwrap().comments_open);
        assert_eq!(ui.input_mode, InputMode::Insert(InsertTarget::Comment(id)));

        type_str(&mut ui, &mut state, "nice one");
        assert_eq!(state.feed.post(id).unwrap().draft_comment, "nice one");

        ui.on_key(KeyCode::Enter, &mut state);
        let post = state.feed.post(id).unwrap();
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].body, "nice one");
        assert_eq!(post.comments[0].author, "User");
        assert!(post.draft_comment.is_empty());
        assert_eq!(ui.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_abandoned_comment_draft_stays_on_its_post() {
        let (mut ui, mut state) = fresh();
        let id = ui.selected_post_id(&state).unwrap();

        ui.on_key(KeyCode::Char('a'), &mut state);
        type_str(&mut ui, &mut state, "unfinished");
        ui.on_key(KeyCode::Esc, &mut state);
        ui.on_key(KeyCode::Char('j'), &mut state);

        assert_eq!(state.feed.post(id).unwrap().draft_comment, "unfinished");
    }

    #[test]
    fn test_blank_comment_submit_keeps_composing() {
        let (mut ui, mut state) = fresh();
        let id = ui.selected_post_id(&state).unwrap();

        ui.on_key(KeyCode::Char('a'), &mut state);
        type_str(&mut ui, &mut state, "  ");
        ui.on_key(KeyCode::Enter, &mut state);

        let post = state.feed.post(id).unwrap();
        assert!(post.comments.is_empty());
        assert_eq!(post.draft_comment, "  ");
        assert_eq!(ui.input_mode, InputMode::Insert(InsertTarget::Comment(id)));
    }

    #[test]
    fn test_chat_flow_sends_a_message() {
        let (mut ui, mut state) = fresh();
        let before = state.chat.len();

        ui.on_key(KeyCode::Char('2'), &mut state);
        ui.on_key(KeyCode::Char('i'), &mut state);
        type_str(&mut ui, &mut state, "good evening");
        ui.on_key(KeyCode::Enter, &mut state);

        assert_eq!(state.chat.len(), before + 1);
        let message = state.chat.messages().last().unwrap();
        assert_eq!(message.body, "good evening");
        assert_eq!(message.sender, "User");
        assert!(ui.chat_draft.is_empty());
    }

    #[test]
    fn test_blank_chat_submit_sends_nothing() {
        let (mut ui, mut state) = fresh();
        let before = state.chat.len();

        ui.on_key(KeyCode::Char('2'), &mut state);
        ui.on_key(KeyCode::Char('i'), &mut state);
        ui.on_key(KeyCode::Enter, &mut state);

        assert_eq!(state.chat.len(), before);
        assert_eq!(ui.input_mode, InputMode::Insert(InsertTarget::Chat));
    }

    #[test]
    fn test_feed_keys_do_nothing_while_composing() {
        let (mut ui, mut state) = fresh();
        let id = ui.selected_post_id(&state).unwrap();

        ui.on_key(KeyCode::Char('p'), &mut state);
        ui.on_key(KeyCode::Char('l'), &mut state);

        assert!(!state.feed.post(id).unwrap().liked);
        assert_eq!(ui.post_draft, "l");
    }

    #[test]
    fn test_space_toggles_playback_only_on_music_tab() {
        let (mut ui, mut state) = fresh();

        ui.on_key(KeyCode::Char(' '), &mut state);
        assert!(!state.player.is_playing());

        ui.on_key(KeyCode::Char('3'), &mut state);
        ui.on_key(KeyCode::Char(' '), &mut state);
        assert!(state.player.is_playing());
        assert_eq!(state.profile.favorite_songs, vec!["Sample Song"]);

        ui.on_key(KeyCode::Char(' '), &mut state);
        assert!(!state.player.is_playing());
        assert_eq!(state.profile.favorite_songs.len(), 1);
    }
}
