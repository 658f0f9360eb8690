//! Word segmentation seam
//!
//! The motion core never segments text itself; it consumes segmentation
//! through [`WordSegmenter`], so the host decides which segmenter to build,
//! when, and from which dictionary. [`JiebaSegmenter`] is the bundled
//! implementation.

use std::io::BufRead;

use jieba_rs::Jieba;

/// Splits one line of text into word tokens.
///
/// Implementations must return tokens whose concatenation reconstructs the
/// line exactly — no characters dropped, reordered, or inserted — and must
/// be deterministic for identical input within a process lifetime.
pub trait WordSegmenter {
    /// Segment `line` into an ordered sequence of tokens.
    fn segment<'t>(&self, line: &'t str) -> Vec<&'t str>;
}

/// Segmenter backed by the jieba dictionary.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Create a segmenter with the bundled default dictionary.
    ///
    /// Building the dictionary is expensive (hundreds of milliseconds);
    /// hosts should construct one segmenter up front and reuse it across
    /// motions.
    pub fn new() -> JiebaSegmenter {
        JiebaSegmenter {
            jieba: Jieba::new(),
        }
    }

    /// Create a segmenter from a custom dictionary in jieba's plain-text
    /// format (one `word frequency [tag]` entry per line).
    pub fn with_dict<R: BufRead>(dict: &mut R) -> Result<JiebaSegmenter, jieba_rs::Error> {
        Ok(JiebaSegmenter {
            jieba: Jieba::with_dict(dict)?,
        })
    }
}

impl Default for JiebaSegmenter {
    fn default() -> JiebaSegmenter {
        JiebaSegmenter::new()
    }
}

impl WordSegmenter for JiebaSegmenter {
    fn segment<'t>(&self, line: &'t str) -> Vec<&'t str> {
        self.jieba.cut(line, true)
    }
}
