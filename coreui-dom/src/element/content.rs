use std::sync::OnceLock;
use std::time::{Duration, Instant};

#[derive(Default, Clone)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// One glyph repeated over the whole content box. Sized 1x1 when auto.
    Fill(char),
    Children(Vec<super::Element>),
    /// Animated frames - cycles through children at the specified interval.
    /// Only the current frame is laid out and rendered.
    Frames {
        children: Vec<super::Element>,
        interval: Duration,
    },
}

impl Content {
    /// Index of the frame to show right now for `count` frames.
    pub fn frame_index(count: usize, interval: Duration) -> usize {
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        if count == 0 {
            return 0;
        }
        let elapsed = EPOCH.get_or_init(Instant::now).elapsed();
        let step = interval.as_millis().max(1);
        ((elapsed.as_millis() / step) % count as u128) as usize
    }
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Fill(c) => write!(f, "Fill({c:?})"),
            Self::Children(c) => write!(f, "Children({c:?})"),
            Self::Frames { children, interval } => {
                write!(f, "Frames({} frames, {:?})", children.len(), interval)
            }
        }
    }
}
