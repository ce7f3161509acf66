use std::collections::VecDeque;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::Reducible;

use crate::model::{Expression, Message};

/// Chat widget state for one page session.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    /// Append-only transcript.
    pub messages: Vec<Message>,
    next_id: u64,
    pub open: bool,
    /// At least one reply is scheduled but has not arrived yet.
    pub typing: bool,
    awaiting: usize,
    pub expression: Expression,
    pub rainbow: bool,
}

pub enum ChatAction {
    Toggle,
    UserSaid { text: String, at: DateTime<Utc> },
    BotSaid { text: String, at: DateTime<Utc> },
    /// Discovery announcement; opens the panel.
    Announce { text: String, at: DateTime<Utc> },
    Relax,
    SetRainbow(bool),
}

impl ChatState {
    pub fn new(welcome: &str, at: DateTime<Utc>) -> Self {
        let mut s = Self {
            messages: Vec::new(),
            next_id: 1,
            open: false,
            typing: false,
            awaiting: 0,
            expression: Expression::Idle,
            rainbow: false,
        };
        s.push(welcome.to_string(), false, at);
        s
    }

    fn push(&mut self, text: String, from_user: bool, at: DateTime<Utc>) {
        self.messages.push(Message {
            id: self.next_id,
            text,
            from_user,
            timestamp: at,
        });
        self.next_id += 1;
    }
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ChatAction::*;
        let mut new = (*self).clone();
        match action {
            Toggle => {
                new.open = !new.open;
            }
            UserSaid { text, at } => {
                new.push(text, true, at);
                new.awaiting += 1;
                new.typing = true;
                new.expression = Expression::Thinking;
            }
            BotSaid { text, at } => {
                new.push(text, false, at);
                new.awaiting = new.awaiting.saturating_sub(1);
                new.typing = new.awaiting > 0;
                new.expression = if new.typing {
                    Expression::Thinking
                } else {
                    Expression::Happy
                };
            }
            Announce { text, at } => {
                new.push(text, false, at);
                new.open = true;
            }
            Relax => {
                if !new.typing {
                    new.expression = Expression::Idle;
                }
            }
            SetRainbow(on) => {
                if new.rainbow == on {
                    return self;
                }
                new.rainbow = on;
            }
        }
        Rc::new(new)
    }
}

/// User messages waiting for a reply, answered one at a time in order.
#[derive(Debug, Default)]
pub struct ReplyQueue {
    waiting: VecDeque<String>,
    busy: bool,
}

impl ReplyQueue {
    /// Returns true when nothing was in flight and the caller should start
    /// answering now; otherwise the text waits its turn.
    pub fn submit(&mut self, text: String) -> bool {
        self.waiting.push_back(text);
        !std::mem::replace(&mut self.busy, true)
    }

    pub fn take_next(&mut self) -> Option<String> {
        self.waiting.pop_front()
    }

    /// Called after a reply lands. True when another message is waiting.
    pub fn settle(&mut self) -> bool {
        if self.waiting.is_empty() {
            self.busy = false;
        }
        self.busy
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}

/// Defers announcements while a reply is being written, so the reply that
/// caused a discovery shows above the announcement.
#[derive(Debug)]
pub struct AnnouncementGate<E> {
    holding: bool,
    held: Vec<E>,
}

impl<E> Default for AnnouncementGate<E> {
    fn default() -> Self {
        Self {
            holding: false,
            held: Vec::new(),
        }
    }
}

impl<E> AnnouncementGate<E> {
    pub fn hold(&mut self) {
        self.holding = true;
    }

    /// Hands the event back when it can be shown now.
    pub fn offer(&mut self, event: E) -> Option<E> {
        if self.holding {
            self.held.push(event);
            None
        } else {
            Some(event)
        }
    }

    /// Stop holding and return what was deferred, oldest first.
    pub fn release(&mut self) -> Vec<E> {
        self.holding = false;
        std::mem::take(&mut self.held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn transcript_is_ordered_with_unique_ids() {
        let s = Rc::new(ChatState::new("welcome", now()));
        let s = s.reduce(ChatAction::UserSaid { text: "hi".into(), at: now() });
        assert!(s.typing);
        assert_eq!(s.expression, Expression::Thinking);
        let s = s.reduce(ChatAction::BotSaid { text: "hello".into(), at: now() });
        assert!(!s.typing);
        assert_eq!(s.expression, Expression::Happy);

        let texts: Vec<&str> = s.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["welcome", "hi", "hello"]);
        let ids: Vec<u64> = s.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(s.messages[1].from_user);
        assert!(!s.messages[2].from_user);
    }

    #[test]
    fn announcement_opens_panel() {
        let s = Rc::new(ChatState::new("welcome", now()));
        assert!(!s.open);
        let s = s.reduce(ChatAction::Announce { text: "found one".into(), at: now() });
        assert!(s.open);
        assert_eq!(s.messages.len(), 2);
        let s = s.reduce(ChatAction::Toggle);
        assert!(!s.open);
    }

    #[test]
    fn relax_waits_for_reply() {
        let s = Rc::new(ChatState::new("welcome", now()));
        let s = s.reduce(ChatAction::UserSaid { text: "q".into(), at: now() });
        let s = s.reduce(ChatAction::Relax);
        assert_eq!(s.expression, Expression::Thinking);
        let s = s.reduce(ChatAction::BotSaid { text: "a".into(), at: now() });
        let s = s.reduce(ChatAction::Relax);
        assert_eq!(s.expression, Expression::Idle);
    }

    #[test]
    fn unchanged_rainbow_keeps_state() {
        let s = Rc::new(ChatState::new("welcome", now()));
        let same = s.clone().reduce(ChatAction::SetRainbow(false));
        assert!(Rc::ptr_eq(&s, &same));
        assert!(s.reduce(ChatAction::SetRainbow(true)).rainbow);
    }

    #[test]
    fn typing_lasts_until_every_reply_lands() {
        let s = Rc::new(ChatState::new("welcome", now()));
        let s = s.reduce(ChatAction::UserSaid { text: "hi".into(), at: now() });
        let s = s.reduce(ChatAction::UserSaid { text: "projects".into(), at: now() });
        let s = s.reduce(ChatAction::BotSaid { text: "hello".into(), at: now() });
        assert!(s.typing);
        assert_eq!(s.expression, Expression::Thinking);
        let s = s.reduce(ChatAction::BotSaid { text: "see projects".into(), at: now() });
        assert!(!s.typing);
        assert_eq!(s.expression, Expression::Happy);
    }

    #[test]
    fn announcements_do_not_count_as_replies() {
        let s = Rc::new(ChatState::new("welcome", now()));
        let s = s.reduce(ChatAction::UserSaid { text: "hi".into(), at: now() });
        let s = s.reduce(ChatAction::Announce { text: "found".into(), at: now() });
        assert!(s.typing);
    }

    #[test]
    fn queue_answers_in_submission_order() {
        let mut q = ReplyQueue::default();
        assert!(q.submit("hi".into()));
        assert!(!q.submit("projects".into()));
        assert!(!q.submit("hint".into()));
        assert_eq!(q.len(), 3);

        assert_eq!(q.take_next().as_deref(), Some("hi"));
        assert!(q.settle());
        assert_eq!(q.take_next().as_deref(), Some("projects"));
        assert!(q.settle());
        assert_eq!(q.take_next().as_deref(), Some("hint"));
        assert!(!q.settle());
        assert!(q.is_empty());

        // idle again: the next submission starts straight away
        assert!(q.submit("again".into()));
    }

    #[test]
    fn message_sent_while_answering_is_picked_up() {
        let mut q = ReplyQueue::default();
        assert!(q.submit("first".into()));
        assert_eq!(q.take_next().as_deref(), Some("first"));
        // arrives while "first" is still being answered
        assert!(!q.submit("second".into()));
        assert!(q.settle());
        assert_eq!(q.take_next().as_deref(), Some("second"));
        assert!(!q.settle());
    }

    #[test]
    fn gate_passes_through_when_open() {
        let mut g = AnnouncementGate::default();
        assert_eq!(g.offer(1), Some(1));
        assert!(g.release().is_empty());
    }

    #[test]
    fn gate_defers_while_held() {
        let mut g = AnnouncementGate::default();
        g.hold();
        assert_eq!(g.offer("found"), None);
        assert_eq!(g.offer("complete"), None);
        assert_eq!(g.release(), vec!["found", "complete"]);
        assert_eq!(g.offer("later"), Some("later"));
    }
}
