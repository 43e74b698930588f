// src/ports/decor.rs
use std::ops::Deref;

const FONT_LINK: &str = r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Cinzel:wght@400;700&display=swap">"#;

const DECOR_STYLE: &str = r#"<style data-decor>
        body { font-family: 'Cinzel', serif; }
        body::before {
            content: '';
            position: fixed;
            inset: 0;
            background: url('https://www.transparenttextures.com/patterns/asfalt-dark.png');
            opacity: .15;
            pointer-events: none;
            mix-blend-mode: overlay;
        }
        .glow {
            position: fixed;
            inset: 0;
            pointer-events: none;
            background: radial-gradient(circle, transparent, #61338322, transparent);
            animation: glow 12s ease-in-out infinite;
        }
        @keyframes glow { 0%, 100% { opacity: .4; } 50% { opacity: .7; } }
        .tile { transition: transform .3s cubic-bezier(.3, 1.4, .6, 1); }
        .tile:hover { transform: perspective(1000px) rotateX(10deg) rotateY(-10deg) scale(1.05); }
    </style>"#;

/// Elements of a document `<head>`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Head {
    elements: Vec<String>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: impl Into<String>) {
        self.elements.push(element.into());
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.elements.iter().any(|el| el.contains(needle))
    }

    pub fn render(&self) -> String {
        self.elements.join("\n    ")
    }
}

/// Font and texture overlay shared by every page.
///
/// Purely presentational: nothing in the card data depends on it.
pub struct Decor;

impl Decor {
    /// Add the decor to `head` for as long as the returned guard lives.
    pub fn acquire(head: &mut Head) -> DecorGuard<'_> {
        let mark = head.len();
        head.push(FONT_LINK);
        head.push(DECOR_STYLE);
        DecorGuard { head, mark }
    }
}

/// Removes the decor elements from the head when dropped.
pub struct DecorGuard<'h> {
    head: &'h mut Head,
    mark: usize,
}

impl Deref for DecorGuard<'_> {
    type Target = Head;

    fn deref(&self) -> &Head {
        &*self.head
    }
}

impl Drop for DecorGuard<'_> {
    fn drop(&mut self) {
        self.head.elements.truncate(self.mark);
    }
}
