// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::Range;

use peniko::kurbo::Size;
use rich_text::{
    LayoutError, LayoutErrorKind, LayoutRequest, LineBreakMode, LineMetrics,
    OBJECT_REPLACEMENT_CHARACTER, TextLayout, TextLayoutEngine,
};

/// Number of bisection steps used to search for the largest fitting font scale.
const SCALE_SEARCH_STEPS: u32 = 16;

/// A deterministic layout engine where every character has the same advance.
///
/// Characters advance by `font_size * advance_ratio + letter_spacing`, lines are
/// `line_height` tall (or `font_size * line_height_ratio` when unset), and embedded
/// placeholders take their own measured size. A font scale applies to the resolved attributes
/// through [`ResolvedAttributes::scaled`] and leaves placeholders alone. This makes layout
/// results easy to predict in tests without loading any fonts.
///
/// [`ResolvedAttributes::scaled`]: rich_text_style::ResolvedAttributes::scaled
///
/// With auto-shrink enabled, the largest font scale in `[minimum_font_scale, 1]` at which the
/// text fits is searched first; the line break mode only truncates once the minimum scale is
/// reached and the text still overflows.
#[derive(Clone, Debug)]
pub struct FixedAdvanceEngine {
    /// Advance of one character as a fraction of the font size.
    pub advance_ratio: f32,
    /// Default line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl Default for FixedAdvanceEngine {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

#[derive(Clone, Debug)]
struct Cluster {
    range: Range<usize>,
    advance: f32,
    height: f32,
    font_size: f32,
    whitespace: bool,
    newline: bool,
}

#[derive(Clone, Debug)]
struct Line {
    clusters: Range<usize>,
}

impl FixedAdvanceEngine {
    /// Creates an engine with the default ratios.
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures every character at `scale`.
    fn clusters(&self, request: &LayoutRequest<'_>, scale: f32) -> Vec<Cluster> {
        let text = request.text;
        let mut placeholders = text.placeholders().iter().peekable();
        let mut clusters = Vec::with_capacity(text.len());
        for run in text.runs() {
            let resolved = run.attributes.resolve().scaled(scale);
            let font_size = resolved.font_size();
            let height = resolved
                .line_height()
                .unwrap_or(font_size * self.line_height_ratio);
            let advance = font_size * self.advance_ratio + resolved.letter_spacing();
            for (offset, ch) in text.as_str()[run.range.clone()].char_indices() {
                let start = run.range.start + offset;
                let range = start..start + ch.len_utf8();
                let placeholder = if ch == OBJECT_REPLACEMENT_CHARACTER {
                    placeholders.next_if(|p| p.index == start)
                } else {
                    None
                };
                clusters.push(match placeholder {
                    Some(p) => Cluster {
                        range,
                        advance: p.width,
                        height: p.height,
                        font_size,
                        whitespace: false,
                        newline: false,
                    },
                    None => Cluster {
                        range,
                        advance: if ch == '\n' { 0.0 } else { advance },
                        height,
                        font_size,
                        whitespace: ch.is_whitespace(),
                        newline: ch == '\n',
                    },
                });
            }
        }
        clusters
    }

    /// Breaks clusters into lines.
    fn break_lines(
        clusters: &[Cluster],
        max_width: Option<f32>,
        mode: LineBreakMode,
    ) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut start = 0;
        let mut width = 0.0_f32;
        let mut last_break: Option<usize> = None;
        for (i, cluster) in clusters.iter().enumerate() {
            if cluster.newline {
                lines.push(Line {
                    clusters: start..i + 1,
                });
                start = i + 1;
                width = 0.0;
                last_break = None;
                continue;
            }
            let advance = cluster.advance;
            let overflows = max_width.is_some_and(|max| width + advance > max);
            if overflows && i > start && !cluster.whitespace {
                let end = match last_break {
                    Some(b) if mode != LineBreakMode::CharWrap && b > start => b,
                    _ => i,
                };
                lines.push(Line {
                    clusters: start..end,
                });
                start = end;
                width = clusters[start..i].iter().map(|c| c.advance).sum();
                last_break = None;
            }
            width += advance;
            if cluster.whitespace {
                last_break = Some(i + 1);
            }
        }
        if start < clusters.len() {
            lines.push(Line {
                clusters: start..clusters.len(),
            });
        }
        lines
    }

    /// Width of a line without trailing whitespace.
    fn line_width(clusters: &[Cluster]) -> f32 {
        let visible = clusters
            .iter()
            .rposition(|c| !c.whitespace)
            .map_or(0, |last| last + 1);
        clusters[..visible].iter().map(|c| c.advance).sum()
    }

    fn line_height(clusters: &[Cluster]) -> f32 {
        clusters.iter().map(|c| c.height).fold(0.0, f32::max)
    }

    /// Number of lines that are visible under the request's line and height limits.
    fn visible_lines(
        clusters: &[Cluster],
        lines: &[Line],
        request: &LayoutRequest<'_>,
    ) -> usize {
        let mut visible = if request.max_lines == 0 {
            lines.len()
        } else {
            lines.len().min(request.max_lines)
        };
        if let Some(max_height) = request.max_height {
            let mut height = 0.0;
            for (i, line) in lines[..visible].iter().enumerate() {
                height += Self::line_height(&clusters[line.clusters.clone()]);
                if height > max_height {
                    // Always show at least one line.
                    visible = i.max(1);
                    break;
                }
            }
        }
        visible
    }

    fn fits(clusters: &[Cluster], request: &LayoutRequest<'_>) -> bool {
        let lines = Self::break_lines(clusters, request.max_width, request.line_break_mode);
        if Self::visible_lines(clusters, &lines, request) < lines.len() {
            return false;
        }
        let Some(max_width) = request.max_width else {
            return true;
        };
        lines
            .iter()
            .all(|line| Self::line_width(&clusters[line.clusters.clone()]) <= max_width)
    }

    /// Finds the largest scale in `[minimum, 1]` at which the text fits.
    fn fit_scale(&self, request: &LayoutRequest<'_>) -> f32 {
        let minimum = request.minimum_font_scale;
        let fits_at = |scale| Self::fits(&self.clusters(request, scale), request);
        if !request.auto_shrink || fits_at(1.0) {
            return 1.0;
        }
        if !fits_at(minimum) {
            return minimum;
        }
        let (mut lo, mut hi) = (minimum, 1.0_f32);
        for _ in 0..SCALE_SEARCH_STEPS {
            let mid = (lo + hi) * 0.5;
            if fits_at(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Drops clusters from the last visible line until an ellipsis fits.
    fn make_room_for_ellipsis(
        clusters: &[Cluster],
        line: &mut Range<usize>,
        mode: LineBreakMode,
        max_width: Option<f32>,
    ) {
        let Some(max_width) = max_width else {
            return;
        };
        let ellipsis = clusters
            .get(line.start)
            .map_or(0.0, |c| c.advance);
        let mut kept: Vec<usize> = line.clone().collect();
        let width = |kept: &[usize]| kept.iter().map(|&i| clusters[i].advance).sum::<f32>();
        while !kept.is_empty() && width(&kept) + ellipsis > max_width {
            match mode {
                LineBreakMode::TruncateHead => {
                    kept.remove(0);
                }
                LineBreakMode::TruncateMiddle => {
                    kept.remove(kept.len() / 2);
                }
                _ => {
                    kept.pop();
                }
            }
        }
        if let (Some(&first), Some(&last)) = (kept.first(), kept.last()) {
            *line = first..last + 1;
        } else {
            *line = line.start..line.start;
        }
    }
}

impl TextLayoutEngine for FixedAdvanceEngine {
    fn layout(&mut self, request: &LayoutRequest<'_>) -> Result<TextLayout, LayoutError> {
        if request.max_width.is_some_and(|w| w.is_nan() || w <= 0.0) {
            return Err(LayoutError::new(
                LayoutErrorKind::InvalidConstraints,
                "available width must be positive",
            ));
        }
        if request.max_height.is_some_and(|h| h.is_nan() || h <= 0.0) {
            return Err(LayoutError::new(
                LayoutErrorKind::InvalidConstraints,
                "available height must be positive",
            ));
        }
        if request.minimum_font_scale.is_nan()
            || request.minimum_font_scale <= 0.0
            || request.minimum_font_scale > 1.0
        {
            return Err(LayoutError::new(
                LayoutErrorKind::InvalidConstraints,
                "minimum font scale must be in (0, 1]",
            ));
        }

        let scale = self.fit_scale(request);
        let clusters = self.clusters(request, scale);
        let lines = Self::break_lines(&clusters, request.max_width, request.line_break_mode);
        let visible = Self::visible_lines(&clusters, &lines, request);
        let mut truncated = visible < lines.len();
        let mut ranges: Vec<Range<usize>> = lines[..visible]
            .iter()
            .map(|line| line.clusters.clone())
            .collect();

        // Overflowing lines get an ellipsis in the truncating modes.
        if let Some(last) = ranges.last_mut() {
            let overflows = request
                .max_width
                .is_some_and(|max| Self::line_width(&clusters[last.clone()]) > max);
            if request.line_break_mode.truncates() && (truncated || overflows) {
                Self::make_room_for_ellipsis(
                    &clusters,
                    last,
                    request.line_break_mode,
                    request.max_width,
                );
            }
            truncated |= overflows;
        }

        let mut y = 0.0_f64;
        let mut width = 0.0_f64;
        let mut metrics = Vec::with_capacity(ranges.len());
        for range in ranges {
            let line = &clusters[range.clone()];
            let height = f64::from(Self::line_height(line));
            let line_width = f64::from(Self::line_width(line));
            let font_size = f64::from(line.iter().map(|c| c.font_size).fold(0.0, f32::max));
            let bytes = match (line.first(), line.last()) {
                (Some(first), Some(last)) => first.range.start..last.range.end,
                _ => 0..0,
            };
            metrics.push(LineMetrics {
                range: bytes,
                x: 0.0,
                y,
                width: line_width,
                height,
                ascender: height * 0.8,
                descender: height * 0.2,
                cap_height: font_size * 0.7,
                x_height: font_size * 0.5,
            });
            y += height;
            width = width.max(line_width);
        }

        log::trace!(
            "laid out {} of {} line(s) at scale {scale}",
            metrics.len(),
            lines.len()
        );
        Ok(TextLayout {
            used_font_scale: scale,
            lines: metrics,
            measured_size: Size::new(width, y),
            truncated,
        })
    }
}
