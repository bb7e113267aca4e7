//! Rotating stoic quotes shown in the header.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

impl Quote {
    pub fn display_text(&self) -> String {
        format!("\u{201c}{}\u{201d} \u{2014} {}", self.text, self.author)
    }
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "The happiness of your life depends upon the quality of your thoughts.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "You have power over your mind - not outside events. Realize this, and you will find strength.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "Very little is needed to make a happy life; it is all within yourself, in your way of thinking.",
        author: "Marcus Aurelius",
    },
    Quote {
        text: "It is not that we have a short time to live, but that we waste a lot of it.",
        author: "Seneca",
    },
];

/// Cursor over [`QUOTES`] plus typewriter progress for the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRotation {
    index: usize,
    revealed: usize,
}

impl QuoteRotation {
    pub fn starting_at(index: usize) -> Self {
        Self {
            index: index % QUOTES.len(),
            revealed: 0,
        }
    }

    pub fn random() -> Self {
        Self::starting_at(rand::thread_rng().gen_range(0..QUOTES.len()))
    }

    pub fn current(&self) -> &'static Quote {
        &QUOTES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next quote and restart the typewriter.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % QUOTES.len();
        self.revealed = 0;
    }

    /// Reveal one more character; returns `false` once fully shown.
    pub fn type_next(&mut self) -> bool {
        let total = self.current().display_text().chars().count();
        if self.revealed < total {
            self.revealed += 1;
            true
        } else {
            false
        }
    }

    pub fn is_typing(&self) -> bool {
        self.revealed < self.current().display_text().chars().count()
    }

    pub fn visible_text(&self) -> String {
        self.current()
            .display_text()
            .chars()
            .take(self.revealed)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps() {
        let mut rotation = QuoteRotation::starting_at(QUOTES.len() - 1);
        rotation.advance();
        assert_eq!(rotation.index(), 0);
        assert_eq!(QuoteRotation::starting_at(QUOTES.len() + 1).index(), 1);
    }

    #[test]
    fn typewriter_reveals_whole_text() {
        let mut rotation = QuoteRotation::starting_at(0);
        assert_eq!(rotation.visible_text(), "");
        while rotation.type_next() {}
        assert!(!rotation.is_typing());
        assert_eq!(rotation.visible_text(), rotation.current().display_text());
        rotation.advance();
        assert!(rotation.is_typing());
        assert_eq!(rotation.visible_text(), "");
    }

    #[test]
    fn random_start_is_in_range() {
        for _ in 0..20 {
            assert!(QuoteRotation::random().index() < QUOTES.len());
        }
    }
}
