//! Content measurement.
//!
//! Pagination needs a single figure: the natural height of the rendered
//! page in px, before content-scale is applied. In the browser a resize
//! observer reports it and the client posts it back ([`FixedMeasurer`]).
//! On the server [`HeadlessMeasurer`] estimates it with an approximate
//! layout pass over the same document tree the preview serializes.
//!
//! The headless pass models what the templates actually emit: block flow
//! with sibling margin collapsing, inline runs with greedy word wrap, flex
//! rows and columns, fixed and fractional grid tracks, explicit and minimum
//! heights. User-agent default margins are not modelled; every element the
//! templates emit carries its spacing inline.

use crate::render::{Element, Node};

use super::font_metrics::{Face, FontClass};
use super::pagination::{PAGE_HEIGHT_IN, PAGE_WIDTH_IN, PX_PER_IN};

const PX_PER_PT: f64 = 96.0 / 72.0;
const PX_PER_MM: f64 = 96.0 / 25.4;
const ROOT_FONT_PX: f64 = 16.0;
const NORMAL_LINE_HEIGHT: f64 = 1.2;
const FIT_EPSILON: f64 = 0.01;

/// Source of the natural (unscaled) content height.
pub trait ContentMeasurer {
    /// `None` until a layout pass has produced a usable height.
    fn natural_height_px(&self) -> Option<f64>;
}

/// A height measured elsewhere, typically by the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedMeasurer(pub Option<f64>);

impl ContentMeasurer for FixedMeasurer {
    fn natural_height_px(&self) -> Option<f64> {
        self.0.filter(|h| h.is_finite() && *h > 0.0)
    }
}

/// Server-side layout estimate for a rendered page.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessMeasurer<'n> {
    root: &'n Node,
    width_px: f64,
    page_height_px: f64,
}

impl<'n> HeadlessMeasurer<'n> {
    /// Lays `root` out the way the preview wrapper does: the content box is
    /// widened by `1 / content_scale` so that scaling brings it back to the
    /// page width, and the page-height variable resolves to `11in / scale`.
    pub fn new(root: &'n Node, content_scale: f64) -> Self {
        let scale = if content_scale.is_finite() && content_scale > 0.0 {
            content_scale
        } else {
            1.0
        };
        Self {
            root,
            width_px: PAGE_WIDTH_IN * PX_PER_IN / scale,
            page_height_px: PAGE_HEIGHT_IN * PX_PER_IN / scale,
        }
    }
}

impl ContentMeasurer for HeadlessMeasurer<'_> {
    fn natural_height_px(&self) -> Option<f64> {
        let layout = Layout {
            page_height_px: self.page_height_px,
        };
        let root = Inherited::root();
        let height = match self.root {
            Node::Element(e) => layout
                .element_box(e, &root, Sizing::Fill(self.width_px))
                .map(|b| b.total())
                .unwrap_or(0.0),
            Node::Text(_) => layout.inline_height(std::slice::from_ref(self.root), self.width_px, &root),
        };
        (height.is_finite() && height > 0.0).then_some(height)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Computed style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum LineHeight {
    /// Unitless; recomputed against each descendant's font size.
    Factor(f64),
    Px(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wrap {
    Normal,
    NoWrap,
    /// Newlines break, other whitespace collapses.
    PreLine,
}

/// Inherited properties that affect text metrics.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    face: Face,
    line_height: LineHeight,
    wrap: Wrap,
}

impl Inherited {
    fn root() -> Self {
        Self {
            face: Face {
                class: FontClass::Sans,
                size_px: ROOT_FONT_PX,
                bold: false,
                uppercase: false,
                letter_spacing_px: 0.0,
            },
            line_height: LineHeight::Factor(NORMAL_LINE_HEIGHT),
            wrap: Wrap::Normal,
        }
    }

    fn line_px(&self) -> f64 {
        match self.line_height {
            LineHeight::Factor(f) => f * self.face.size_px,
            LineHeight::Px(px) => px,
        }
    }

    fn derive(&self, e: &Element, page_height_px: f64) -> Self {
        let mut out = *self;
        let style = &e.style;
        if matches!(e.tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "strong" | "b" | "th") {
            out.face.bold = true;
        }
        if let Some(size) = style.get("font-size").and_then(|v| {
            length_px(v, self.face.size_px, Some(self.face.size_px), page_height_px)
        }) {
            out.face.size_px = size;
        }
        let own_size = out.face.size_px;
        if let Some(family) = style.get("font-family") {
            out.face.class = FontClass::from_css(family);
        }
        if let Some(weight) = style.get("font-weight") {
            out.face.bold = match weight.trim() {
                "bold" | "bolder" => true,
                "normal" | "lighter" => false,
                numeric => numeric.parse::<u16>().map(|w| w >= 600).unwrap_or(out.face.bold),
            };
        }
        if let Some(transform) = style.get("text-transform") {
            out.face.uppercase = transform.trim() == "uppercase";
        }
        if let Some(spacing) = style.get("letter-spacing") {
            out.face.letter_spacing_px =
                length_px(spacing, own_size, None, page_height_px).unwrap_or(0.0);
        }
        if let Some(lh) = style.get("line-height") {
            let lh = lh.trim();
            if lh == "normal" {
                out.line_height = LineHeight::Factor(NORMAL_LINE_HEIGHT);
            } else if let Ok(factor) = lh.parse::<f64>() {
                out.line_height = LineHeight::Factor(factor);
            } else if let Some(px) = length_px(lh, own_size, Some(own_size), page_height_px) {
                out.line_height = LineHeight::Px(px);
            }
        }
        if let Some(ws) = style.get("white-space") {
            out.wrap = match ws.trim() {
                "nowrap" => Wrap::NoWrap,
                "pre-line" | "pre-wrap" | "pre" => Wrap::PreLine,
                _ => Wrap::Normal,
            };
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Display {
    Block,
    Inline,
    InlineBlock,
    Flex,
    InlineFlex,
    Grid,
    None,
}

impl Display {
    fn of(e: &Element) -> Self {
        match e.style.get("display").map(str::trim) {
            Some("none") => Display::None,
            Some("flex") => Display::Flex,
            Some("inline-flex") => Display::InlineFlex,
            Some("grid") | Some("inline-grid") => Display::Grid,
            Some("inline-block") => Display::InlineBlock,
            Some("inline") => Display::Inline,
            Some("block") | Some("list-item") => Display::Block,
            _ => match e.tag {
                "span" | "a" | "strong" | "em" | "b" | "i" | "small" | "br" => Display::Inline,
                "img" => Display::InlineBlock,
                _ => Display::Block,
            },
        }
    }

    fn is_inline_level(self) -> bool {
        matches!(self, Display::Inline | Display::InlineBlock | Display::InlineFlex)
    }
}

fn out_of_flow(e: &Element) -> bool {
    matches!(
        e.style.get("position").map(str::trim),
        Some("absolute") | Some("fixed")
    ) || Display::of(e) == Display::None
}

fn border_box_sizing(e: &Element) -> bool {
    e.style.get("box-sizing").map(str::trim) == Some("border-box")
}

// ────────────────────────────────────────────────────────────────────────────
// Value parsing
// ────────────────────────────────────────────────────────────────────────────

/// Resolves a CSS length. `percent_base` is `None` where percentages are
/// not resolvable (heights against an auto-height parent).
fn length_px(value: &str, font_px: f64, percent_base: Option<f64>, page_height_px: f64) -> Option<f64> {
    let v = value.trim();
    if v == "0" {
        return Some(0.0);
    }
    if v.starts_with("var(--resume-page-height") {
        return Some(page_height_px);
    }
    let (number, factor) = if let Some(n) = v.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = v.strip_suffix("pt") {
        (n, PX_PER_PT)
    } else if let Some(n) = v.strip_suffix("mm") {
        (n, PX_PER_MM)
    } else if let Some(n) = v.strip_suffix("rem") {
        (n, ROOT_FONT_PX)
    } else if let Some(n) = v.strip_suffix("em") {
        (n, font_px)
    } else if let Some(n) = v.strip_suffix("in") {
        (n, PX_PER_IN)
    } else if let Some(n) = v.strip_suffix('%') {
        (n, percent_base? / 100.0)
    } else {
        return None;
    };
    number.trim().parse::<f64>().ok().map(|n| n * factor)
}

/// Splits on whitespace outside parentheses.
fn split_top_level(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if c.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                parts.push(&value[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        parts.push(&value[s..]);
    }
    parts
}

/// Expands a 1–4 value shorthand into `[top, right, bottom, left]`.
fn shorthand<T: Copy>(values: &[T]) -> Option<[T; 4]> {
    match *values {
        [a] => Some([a, a, a, a]),
        [a, b] => Some([a, b, a, b]),
        [a, b, c] => Some([a, b, c, b]),
        [a, b, c, d] => Some([a, b, c, d]),
        _ => None,
    }
}

fn border_width(value: &str, font_px: f64) -> f64 {
    value
        .split_whitespace()
        .find_map(|token| match token {
            "none" | "hidden" => Some(0.0),
            "thin" => Some(1.0),
            "medium" => Some(3.0),
            "thick" => Some(5.0),
            other => length_px(other, font_px, None, 0.0),
        })
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, Default)]
struct Edges {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
}

impl Edges {
    fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

struct BoxModel {
    margin: Edges,
    /// Padding plus border.
    inset: Edges,
}

impl BoxModel {
    fn of(e: &Element, font_px: f64, width_base: f64) -> Self {
        let resolve = |v: &str| length_px(v, font_px, Some(width_base), 0.0).unwrap_or(0.0);
        let edges = |prefix: &str, longhands: [&'static str; 4]| {
            let mut out = [0.0; 4];
            if let Some(short) = e.style.get(prefix) {
                let values: Vec<f64> = split_top_level(short).into_iter().map(resolve).collect();
                if let Some(expanded) = shorthand(&values) {
                    out = expanded;
                }
            }
            for (slot, property) in out.iter_mut().zip(longhands) {
                if let Some(v) = e.style.get(property) {
                    *slot = resolve(v);
                }
            }
            out
        };
        let margin = edges(
            "margin",
            ["margin-top", "margin-right", "margin-bottom", "margin-left"],
        );
        let padding = edges(
            "padding",
            ["padding-top", "padding-right", "padding-bottom", "padding-left"],
        );

        let mut border = [e.style.get("border").map_or(0.0, |v| border_width(v, font_px)); 4];
        for (slot, property) in border.iter_mut().zip([
            "border-top",
            "border-right",
            "border-bottom",
            "border-left",
        ]) {
            if let Some(v) = e.style.get(property) {
                *slot = border_width(v, font_px);
            }
        }

        let edge = |v: [f64; 4]| Edges {
            top: v[0],
            right: v[1],
            bottom: v[2],
            left: v[3],
        };
        Self {
            margin: edge(margin),
            inset: edge([
                padding[0] + border[0],
                padding[1] + border[1],
                padding[2] + border[2],
                padding[3] + border[3],
            ]),
        }
    }
}

struct Gaps {
    row: f64,
    column: f64,
}

impl Gaps {
    fn of(e: &Element, font_px: f64, width_base: f64) -> Self {
        let resolve = |v: &str| length_px(v, font_px, Some(width_base), 0.0).unwrap_or(0.0);
        let (mut row, mut column) = match e.style.get("gap").map(split_top_level).as_deref() {
            Some([both]) => (resolve(*both), resolve(*both)),
            Some([r, c, ..]) => (resolve(*r), resolve(*c)),
            _ => (0.0, 0.0),
        };
        if let Some(v) = e.style.get("row-gap") {
            row = resolve(v);
        }
        if let Some(v) = e.style.get("column-gap") {
            column = resolve(v);
        }
        Self { row, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Track {
    Fixed(f64),
    Fr(f64),
}

fn grid_tracks(value: &str, font_px: f64, width_base: f64) -> Vec<Track> {
    let mut tracks = Vec::new();
    for token in split_top_level(value) {
        if let Some(inner) = token.strip_prefix("repeat(").and_then(|t| t.strip_suffix(')')) {
            let Some((count, pattern)) = inner.split_once(',') else {
                continue;
            };
            let count = count.trim().parse::<usize>().unwrap_or(1);
            let repeated = grid_tracks(pattern, font_px, width_base);
            for _ in 0..count {
                tracks.extend(repeated.iter().copied());
            }
        } else {
            tracks.push(track(token, font_px, width_base));
        }
    }
    tracks
}

fn track(token: &str, font_px: f64, width_base: f64) -> Track {
    let token = token.trim();
    if let Some(inner) = token.strip_prefix("minmax(").and_then(|t| t.strip_suffix(')')) {
        let max = inner.rsplit(',').next().unwrap_or("1fr");
        return track(max, font_px, width_base);
    }
    if let Some(fr) = token.strip_suffix("fr") {
        return Track::Fr(fr.trim().parse().unwrap_or(1.0));
    }
    length_px(token, font_px, Some(width_base), 0.0)
        .map(Track::Fixed)
        .unwrap_or(Track::Fr(1.0))
}

/// `(grow, shrink, basis is zero)` from `flex`, `flex-grow`, `flex-shrink`.
fn flex_factors(e: &Element) -> (f64, f64, bool) {
    let (mut grow, mut shrink, mut zero_basis) = (0.0, 1.0, false);
    if let Some(flex) = e.style.get("flex") {
        let parts: Vec<&str> = flex.split_whitespace().collect();
        match parts.as_slice() {
            ["none"] => shrink = 0.0,
            ["auto"] => grow = 1.0,
            [g] => {
                grow = g.parse().unwrap_or(0.0);
                zero_basis = true;
            }
            [g, s, rest @ ..] => {
                grow = g.parse().unwrap_or(0.0);
                shrink = s.parse().unwrap_or(1.0);
                zero_basis = rest.first().map_or(true, |b| b.trim_end_matches('%') == "0");
            }
            [] => {}
        }
    }
    if let Some(g) = e.style.get("flex-grow").and_then(|v| v.trim().parse().ok()) {
        grow = g;
    }
    if let Some(s) = e.style.get("flex-shrink").and_then(|v| v.trim().parse().ok()) {
        shrink = s;
    }
    (grow, shrink, zero_basis)
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Sizing {
    /// Fill the available width, honouring `width` and `max-width`.
    Fill(f64),
    /// Border-box width already decided by a flex or grid container.
    Exact(f64),
}

/// Vertical extent of a laid-out box.
#[derive(Debug, Clone, Copy)]
struct Outer {
    margin_top: f64,
    border_box: f64,
    margin_bottom: f64,
}

impl Outer {
    fn total(&self) -> f64 {
        self.margin_top + self.border_box + self.margin_bottom
    }
}

#[derive(Debug, Clone, Copy)]
enum Item {
    Word { width: f64, height: f64 },
    Space(f64),
    Break,
}

struct Layout {
    page_height_px: f64,
}

impl Layout {
    fn element_box(&self, e: &Element, parent: &Inherited, sizing: Sizing) -> Option<Outer> {
        if out_of_flow(e) {
            return None;
        }
        let inh = parent.derive(e, self.page_height_px);
        let font_px = inh.face.size_px;
        let base = match sizing {
            Sizing::Fill(w) | Sizing::Exact(w) => w,
        };
        let bx = BoxModel::of(e, font_px, base);

        let border_w = match sizing {
            Sizing::Exact(w) => w,
            Sizing::Fill(avail) => {
                let own = e
                    .style
                    .get("width")
                    .and_then(|v| length_px(v, font_px, Some(avail), self.page_height_px))
                    .map(|w| if border_box_sizing(e) { w } else { w + bx.inset.horizontal() });
                let mut w = own.unwrap_or(avail - bx.margin.horizontal());
                if let Some(max) = e
                    .style
                    .get("max-width")
                    .and_then(|v| length_px(v, font_px, Some(avail), self.page_height_px))
                {
                    let max = if border_box_sizing(e) { max } else { max + bx.inset.horizontal() };
                    w = w.min(max);
                }
                w
            }
        }
        .max(0.0);
        let content_w = (border_w - bx.inset.horizontal()).max(0.0);

        let mut content_h = match Display::of(e) {
            Display::Flex | Display::InlineFlex => {
                let column = matches!(
                    e.style.get("flex-direction").map(str::trim),
                    Some("column") | Some("column-reverse")
                );
                if column {
                    self.flex_column(e, content_w, &inh)
                } else {
                    self.flex_row(e, content_w, &inh)
                }
            }
            Display::Grid => self.grid(e, content_w, &inh),
            _ if e.tag == "img" => 0.0,
            _ => self.flow(&e.children, content_w, &inh),
        };

        let to_content = |h: f64| {
            if border_box_sizing(e) {
                (h - bx.inset.vertical()).max(0.0)
            } else {
                h
            }
        };
        let height_of = |property: &str| {
            e.style
                .get(property)
                .and_then(|v| length_px(v, font_px, None, self.page_height_px))
                .map(to_content)
        };
        if let Some(h) = height_of("height") {
            content_h = h;
        }
        if let Some(min) = height_of("min-height") {
            content_h = content_h.max(min);
        }

        Some(Outer {
            margin_top: bx.margin.top,
            border_box: content_h + bx.inset.vertical(),
            margin_bottom: bx.margin.bottom,
        })
    }

    /// Block flow: block children stack with collapsed sibling margins,
    /// runs of inline children wrap into line boxes.
    fn flow(&self, children: &[Node], width: f64, inh: &Inherited) -> f64 {
        let mut height = 0.0;
        let mut pending_margin: Option<f64> = None;
        let mut run_start = 0;

        let flush_run = |run: &[Node], height: &mut f64, pending: &mut Option<f64>| {
            let h = self.inline_height(run, width, inh);
            if h > 0.0 {
                *height += pending.take().unwrap_or(0.0) + h;
            }
        };

        for (i, child) in children.iter().enumerate() {
            let Node::Element(e) = child else {
                continue;
            };
            if out_of_flow(e) || Display::of(e).is_inline_level() {
                continue;
            }
            flush_run(&children[run_start..i], &mut height, &mut pending_margin);
            run_start = i + 1;
            if let Some(outer) = self.element_box(e, inh, Sizing::Fill(width)) {
                let collapsed = match pending_margin {
                    Some(prev) => prev.max(outer.margin_top),
                    None => outer.margin_top,
                };
                height += collapsed + outer.border_box;
                pending_margin = Some(outer.margin_bottom);
            }
        }
        flush_run(&children[run_start..], &mut height, &mut pending_margin);
        height + pending_margin.unwrap_or(0.0)
    }

    fn inline_height(&self, nodes: &[Node], width: f64, inh: &Inherited) -> f64 {
        let mut items = Vec::new();
        for node in nodes {
            self.collect_inline(node, width, inh, &mut items);
        }
        line_boxes(&items, width, inh.line_px())
    }

    fn collect_inline(&self, node: &Node, width: f64, inh: &Inherited, items: &mut Vec<Item>) {
        match node {
            Node::Text(value) => push_text(value, inh, items),
            Node::Element(e) if out_of_flow(e) => {}
            Node::Element(e) if e.tag == "br" => items.push(Item::Break),
            Node::Element(e) => match Display::of(e) {
                Display::Inline => {
                    let own = inh.derive(e, self.page_height_px);
                    let bx = BoxModel::of(e, own.face.size_px, width);
                    let lead = bx.margin.left + bx.inset.left;
                    let trail = bx.margin.right + bx.inset.right;
                    if lead > 0.0 {
                        items.push(Item::Word { width: lead, height: 0.0 });
                    }
                    for child in &e.children {
                        self.collect_inline(child, width, &own, items);
                    }
                    if trail > 0.0 {
                        items.push(Item::Word { width: trail, height: 0.0 });
                    }
                }
                _ => {
                    let atom_w = self.max_content(node, inh).min(width);
                    let own = inh.derive(e, self.page_height_px);
                    let bx = BoxModel::of(e, own.face.size_px, width);
                    let height = self
                        .element_box(e, inh, Sizing::Exact((atom_w - bx.margin.horizontal()).max(0.0)))
                        .map_or(0.0, |b| b.total());
                    items.push(Item::Word {
                        width: atom_w,
                        height,
                    });
                }
            },
        }
    }

    fn flex_column(&self, e: &Element, width: f64, inh: &Inherited) -> f64 {
        let gaps = Gaps::of(e, inh.face.size_px, width);
        let heights: Vec<f64> = e
            .children
            .iter()
            .filter_map(|child| self.item_height(child, width, inh, Sizing::Fill(width)))
            .collect();
        stacked(&heights, gaps.row)
    }

    fn flex_row(&self, e: &Element, width: f64, inh: &Inherited) -> f64 {
        let gaps = Gaps::of(e, inh.face.size_px, width);
        let wrap = e.style.get("flex-wrap").map(str::trim) == Some("wrap");

        // (node, outer basis, grow, shrink, horizontal margins)
        let mut items = Vec::new();
        for child in &e.children {
            match child {
                Node::Text(t) if t.trim().is_empty() => {}
                Node::Text(_) => items.push((child, self.max_content(child, inh), 0.0, 1.0, 0.0)),
                Node::Element(item) if out_of_flow(item) => {}
                Node::Element(item) => {
                    let own = inh.derive(item, self.page_height_px);
                    let bx = BoxModel::of(item, own.face.size_px, width);
                    let (grow, shrink, zero_basis) = flex_factors(item);
                    let explicit = item
                        .style
                        .get("width")
                        .and_then(|v| length_px(v, own.face.size_px, Some(width), self.page_height_px))
                        .map(|w| {
                            let border_w = if border_box_sizing(item) {
                                w
                            } else {
                                w + bx.inset.horizontal()
                            };
                            border_w + bx.margin.horizontal()
                        });
                    let basis = match explicit {
                        Some(w) => w,
                        None if zero_basis => bx.margin.horizontal() + bx.inset.horizontal(),
                        None => self.max_content(child, inh),
                    };
                    items.push((child, basis, grow, shrink, bx.margin.horizontal()));
                }
            }
        }
        if items.is_empty() {
            return 0.0;
        }

        if wrap {
            let mut lines: Vec<f64> = Vec::new();
            let mut used = 0.0;
            let mut line_h = 0.0;
            let mut open = false;
            for (node, basis, _, _, margins) in &items {
                let w = basis.min(width);
                if open && used + gaps.column + w > width + FIT_EPSILON {
                    lines.push(line_h);
                    used = 0.0;
                    line_h = 0.0;
                    open = false;
                }
                used += if open { gaps.column + w } else { w };
                open = true;
                let h = self
                    .item_height(node, w, inh, Sizing::Exact((w - margins).max(0.0)))
                    .unwrap_or(0.0);
                line_h = f64::max(line_h, h);
            }
            if open {
                lines.push(line_h);
            }
            return stacked(&lines, gaps.row);
        }

        let gap_total = gaps.column * (items.len() - 1) as f64;
        let free = width - gap_total - items.iter().map(|i| i.1).sum::<f64>();
        let total_grow: f64 = items.iter().map(|i| i.2).sum();
        let total_shrink: f64 = items.iter().map(|i| i.1 * i.3).sum();

        items
            .iter()
            .map(|(node, basis, grow, shrink, margins)| {
                let w = if free > 0.0 && total_grow > 0.0 {
                    basis + free * grow / total_grow
                } else if free < 0.0 && total_shrink > 0.0 {
                    (basis + free * basis * shrink / total_shrink).max(0.0)
                } else {
                    *basis
                };
                self.item_height(node, w, inh, Sizing::Exact((w - margins).max(0.0)))
                    .unwrap_or(0.0)
            })
            .fold(0.0, f64::max)
    }

    fn grid(&self, e: &Element, width: f64, inh: &Inherited) -> f64 {
        let font_px = inh.face.size_px;
        let gaps = Gaps::of(e, font_px, width);
        let mut tracks = e
            .style
            .get("grid-template-columns")
            .map(|v| grid_tracks(v, font_px, width))
            .unwrap_or_default();
        if tracks.is_empty() {
            tracks.push(Track::Fr(1.0));
        }
        let fixed: f64 = tracks
            .iter()
            .map(|t| if let Track::Fixed(px) = t { *px } else { 0.0 })
            .sum();
        let fr_total: f64 = tracks
            .iter()
            .map(|t| if let Track::Fr(fr) = t { *fr } else { 0.0 })
            .sum();
        let free = (width - fixed - gaps.column * (tracks.len() - 1) as f64).max(0.0);
        let widths: Vec<f64> = tracks
            .iter()
            .map(|t| match t {
                Track::Fixed(px) => *px,
                Track::Fr(fr) if fr_total > 0.0 => free * fr / fr_total,
                Track::Fr(_) => 0.0,
            })
            .collect();

        let cells: Vec<&Node> = e
            .children
            .iter()
            .filter(|c| match c {
                Node::Text(t) => !t.trim().is_empty(),
                Node::Element(el) => !out_of_flow(el),
            })
            .collect();
        let rows: Vec<f64> = cells
            .chunks(widths.len())
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(cell, w)| {
                        self.item_height(cell, *w, inh, Sizing::Fill(*w))
                            .unwrap_or(0.0)
                    })
                    .fold(0.0, f64::max)
            })
            .collect();
        stacked(&rows, gaps.row)
    }

    /// Outer height of a flex item or grid cell; text becomes an anonymous block.
    fn item_height(&self, node: &Node, outer_w: f64, inh: &Inherited, sizing: Sizing) -> Option<f64> {
        match node {
            Node::Text(t) if t.trim().is_empty() => None,
            Node::Text(_) => Some(self.inline_height(std::slice::from_ref(node), outer_w, inh)),
            Node::Element(e) => self.element_box(e, inh, sizing).map(|b| b.total()),
        }
    }

    /// Width the node would take on one unbroken line, margins included.
    fn max_content(&self, node: &Node, parent: &Inherited) -> f64 {
        let e = match node {
            Node::Text(value) => return text_max_width(value, parent),
            Node::Element(e) if out_of_flow(e) || e.tag == "br" => return 0.0,
            Node::Element(e) => e,
        };
        let inh = parent.derive(e, self.page_height_px);
        let font_px = inh.face.size_px;
        let bx = BoxModel::of(e, font_px, 0.0);
        let own = e
            .style
            .get("width")
            .and_then(|v| length_px(v, font_px, None, self.page_height_px))
            .map(|w| if border_box_sizing(e) { w } else { w + bx.inset.horizontal() });
        if let Some(w) = own {
            return w + bx.margin.horizontal();
        }

        let display = Display::of(e);
        let children = e.children.iter().map(|c| self.max_content(c, &inh));
        let content = match display {
            Display::Flex | Display::InlineFlex
                if !matches!(
                    e.style.get("flex-direction").map(str::trim),
                    Some("column") | Some("column-reverse")
                ) =>
            {
                let widths: Vec<f64> = children.collect();
                let gap = Gaps::of(e, font_px, 0.0).column;
                widths.iter().sum::<f64>() + gap * widths.len().saturating_sub(1) as f64
            }
            Display::Inline => children.sum::<f64>(),
            _ => {
                // Inline children share a line; block children each take their own.
                let mut widest: f64 = 0.0;
                let mut run = 0.0;
                for (child, w) in e.children.iter().zip(children) {
                    let inline = match child {
                        Node::Text(_) => true,
                        Node::Element(c) => Display::of(c).is_inline_level(),
                    };
                    if inline {
                        run += w;
                    } else {
                        widest = widest.max(run).max(w);
                        run = 0.0;
                    }
                }
                widest.max(run)
            }
        };
        content + bx.inset.horizontal() + bx.margin.horizontal()
    }
}

fn stacked(heights: &[f64], gap: f64) -> f64 {
    if heights.is_empty() {
        return 0.0;
    }
    heights.iter().sum::<f64>() + gap * (heights.len() - 1) as f64
}

fn push_text(value: &str, inh: &Inherited, items: &mut Vec<Item>) {
    let face = inh.face;
    let height = inh.line_px();
    let space = face.space_px();
    let lines: Vec<&str> = if inh.wrap == Wrap::PreLine {
        value.split('\n').collect()
    } else {
        vec![value]
    };
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            items.push(Item::Break);
        }
        if line.starts_with(char::is_whitespace) {
            items.push(Item::Space(space));
        }
        if inh.wrap == Wrap::NoWrap {
            let joined = line.split_whitespace().collect::<Vec<_>>().join(" ");
            if !joined.is_empty() {
                items.push(Item::Word {
                    width: face.width_px(&joined),
                    height,
                });
            }
        } else {
            for (j, word) in line.split_whitespace().enumerate() {
                if j > 0 {
                    items.push(Item::Space(space));
                }
                items.push(Item::Word {
                    width: face.width_px(word),
                    height,
                });
            }
        }
        if line.ends_with(char::is_whitespace) && !line.trim().is_empty() {
            items.push(Item::Space(space));
        }
    }
}

fn text_max_width(value: &str, inh: &Inherited) -> f64 {
    let face = inh.face;
    let lines: Vec<&str> = if inh.wrap == Wrap::PreLine {
        value.split('\n').collect()
    } else {
        vec![value]
    };
    lines
        .iter()
        .map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            let spaces = words.len().saturating_sub(1) as f64;
            words.iter().map(|w| face.width_px(w)).sum::<f64>() + spaces * face.space_px()
        })
        .fold(0.0, f64::max)
}

/// Greedy line breaking. `strut` is the block's own line height, the
/// minimum height of every line box.
fn line_boxes(items: &[Item], width: f64, strut: f64) -> f64 {
    let mut total = 0.0;
    let mut used = 0.0;
    let mut line_h = strut;
    let mut has_content = false;
    let mut pending_space = 0.0;

    for item in items {
        match *item {
            Item::Space(w) => {
                if has_content {
                    pending_space = f64::max(pending_space, w);
                }
            }
            Item::Break => {
                total += line_h;
                used = 0.0;
                line_h = strut;
                has_content = false;
                pending_space = 0.0;
            }
            Item::Word { width: w, height } => {
                if has_content && used + pending_space + w > width + FIT_EPSILON {
                    total += line_h;
                    used = w;
                    line_h = strut.max(height);
                } else {
                    used += pending_space + w;
                    line_h = line_h.max(height);
                }
                pending_space = 0.0;
                has_content = true;
            }
        }
    }
    if has_content {
        total += line_h;
    }
    total
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, ResumeData};
    use crate::render::{el, Element, RenderContext};
    use crate::templates;

    fn measure(node: impl Into<Node>) -> f64 {
        let node = node.into();
        HeadlessMeasurer::new(&node, 1.0)
            .natural_height_px()
            .unwrap_or(0.0)
    }

    fn block(height: &str) -> Element {
        el("div").css("height", height)
    }

    #[test]
    fn test_fixed_measurer_rejects_unusable_heights() {
        assert_eq!(FixedMeasurer(Some(1800.0)).natural_height_px(), Some(1800.0));
        assert_eq!(FixedMeasurer(None).natural_height_px(), None);
        assert_eq!(FixedMeasurer(Some(f64::NAN)).natural_height_px(), None);
        assert_eq!(FixedMeasurer(Some(-4.0)).natural_height_px(), None);
        assert_eq!(FixedMeasurer(Some(0.0)).natural_height_px(), None);
    }

    #[test]
    fn test_length_units() {
        assert_eq!(length_px("12px", 10.0, None, 0.0), Some(12.0));
        assert_eq!(length_px("1.5em", 10.0, None, 0.0), Some(15.0));
        assert!((length_px("9pt", 10.0, None, 0.0).unwrap_or(0.0) - 12.0).abs() < 1e-9);
        assert_eq!(length_px("1in", 10.0, None, 0.0), Some(96.0));
        assert!((length_px("25.4mm", 10.0, None, 0.0).unwrap_or(0.0) - 96.0).abs() < 1e-9);
        assert_eq!(length_px("50%", 10.0, Some(300.0), 0.0), Some(150.0));
        assert_eq!(length_px("50%", 10.0, None, 0.0), None);
        assert_eq!(length_px("auto", 10.0, None, 0.0), None);
        assert_eq!(length_px("var(--resume-page-height, 11in)", 10.0, None, 960.0), Some(960.0));
    }

    #[test]
    fn test_grid_tracks_expand_repeat_and_minmax() {
        assert_eq!(
            grid_tracks("repeat(2, minmax(0, 1fr))", 10.0, 100.0),
            vec![Track::Fr(1.0), Track::Fr(1.0)]
        );
        assert_eq!(
            grid_tracks("2fr 1fr", 10.0, 100.0),
            vec![Track::Fr(2.0), Track::Fr(1.0)]
        );
        assert_eq!(
            grid_tracks("120px 1fr", 10.0, 100.0),
            vec![Track::Fixed(120.0), Track::Fr(1.0)]
        );
    }

    #[test]
    fn test_empty_page_fills_one_page_at_any_scale() {
        let page: Node = el("div")
            .css("min-height", "var(--resume-page-height, 11in)")
            .into();
        let h = HeadlessMeasurer::new(&page, 1.0).natural_height_px();
        assert_eq!(h, Some(1056.0));
        let scaled = HeadlessMeasurer::new(&page, 1.1).natural_height_px().unwrap_or(0.0);
        assert!((scaled * 1.1 - 1056.0).abs() < 1e-6);
    }

    #[test]
    fn test_paragraph_wraps_greedily() {
        // "word" is 2.17em: 21.7px at 10px, with 2.5px spaces. 33 fit in 816px.
        let words = vec!["word"; 400].join(" ");
        let node = el("div")
            .css("font-size", "10px")
            .css("line-height", "1.5")
            .child(el("p").css("margin", "0").text(words));
        let h = measure(node);
        assert!((h - 13.0 * 15.0).abs() < 1e-6, "got {h}");
    }

    #[test]
    fn test_sibling_margins_collapse() {
        let node = el("div")
            .child(block("10px").css("margin-bottom", "20px"))
            .child(block("10px").css("margin-top", "10px"));
        assert_eq!(measure(node), 40.0);
    }

    #[test]
    fn test_pre_line_breaks_on_newlines() {
        let node = el("div")
            .css("line-height", "20px")
            .css("white-space", "pre-line")
            .text("a\nb\nc");
        assert_eq!(measure(node), 60.0);
    }

    #[test]
    fn test_hidden_and_absolute_children_take_no_space() {
        let node = el("div")
            .child(block("10px"))
            .child(block("500px").css("display", "none"))
            .child(block("500px").css("position", "absolute"));
        assert_eq!(measure(node), 10.0);
    }

    #[test]
    fn test_padding_border_and_min_height() {
        let node = el("div")
            .css("padding", "10px 0")
            .css("border-bottom", "2px solid #000")
            .child(block("30px"));
        assert_eq!(measure(node), 52.0);

        let boxed = el("div")
            .css("box-sizing", "border-box")
            .css("padding", "10px")
            .css("min-height", "100px")
            .child(block("30px"));
        assert_eq!(measure(boxed), 100.0);
    }

    #[test]
    fn test_flex_row_takes_tallest_item() {
        let node = el("div")
            .css("display", "flex")
            .css("gap", "16px")
            .child(block("40px").css("width", "30%"))
            .child(el("div").css("flex", "1").child(block("90px")));
        assert_eq!(measure(node), 90.0);
    }

    #[test]
    fn test_flex_column_adds_gaps() {
        let node = el("div")
            .css("display", "flex")
            .css("flex-direction", "column")
            .css("gap", "4px")
            .child(block("10px"))
            .child(block("10px"))
            .child(block("10px"));
        assert_eq!(measure(node), 38.0);
    }

    #[test]
    fn test_grid_rows_use_row_gap() {
        let node = el("div")
            .css("display", "grid")
            .css("grid-template-columns", "repeat(2, minmax(0, 1fr))")
            .css("gap", "8px")
            .children((0..4).map(|_| block("10px")))
            .child(block("25px"));
        assert_eq!(measure(node), 10.0 + 8.0 + 10.0 + 8.0 + 25.0);
    }

    #[test]
    fn test_narrow_flex_item_wraps_more() {
        let words = vec!["word"; 60].join(" ");
        let wide = el("div")
            .css("font-size", "10px")
            .css("line-height", "1")
            .css("display", "flex")
            .child(el("div").css("flex", "1").text(words.clone()));
        let narrow = el("div")
            .css("font-size", "10px")
            .css("line-height", "1")
            .css("display", "flex")
            .child(el("div").css("width", "25%").css("flex-shrink", "0").text(words))
            .child(el("div").css("flex", "1"));
        assert!(measure(narrow) > measure(wide));
    }

    #[test]
    fn test_chips_wrap_onto_new_lines() {
        let chip = || {
            el("span")
                .css("display", "inline-block")
                .css("padding", "4px 8px")
                .css("margin", "0 4px 4px 0")
                .text("Distributed systems")
        };
        let one = el("div").css("font-size", "10px").child(chip());
        let many = el("div").css("font-size", "10px").children((0..40).map(|_| chip()));
        assert!(measure(many) > 3.0 * measure(one));
    }

    #[test]
    fn test_more_content_measures_taller() {
        let mut data = ResumeData::blank("a@b.c");
        data.personal_info.first_name = "Ada".into();
        let settings = data.resolved_settings();
        let template = templates::resolve_or(Some("modern"), templates::DEFAULT_TEMPLATE_ID);
        let short = template.render(&RenderContext::new(&data, &settings));
        let short_h = HeadlessMeasurer::new(&short, 1.0)
            .natural_height_px()
            .unwrap_or(0.0);
        assert!(short_h >= 1056.0 - 1e-6);

        for i in 0..40 {
            data.experience.push(Experience {
                id: format!("e{i}"),
                position: "Staff Engineer".into(),
                company: "Initech".into(),
                description: "Led the migration of billing to an event-sourced ledger\n\
                              Cut deploy times from an hour to six minutes\n\
                              Mentored four engineers through promotion"
                    .into(),
                ..Experience::default()
            });
        }
        let settings = data.resolved_settings();
        let long = template.render(&RenderContext::new(&data, &settings));
        let long_h = HeadlessMeasurer::new(&long, 1.0)
            .natural_height_px()
            .unwrap_or(0.0);
        assert!(long_h > 2.0 * 1056.0, "got {long_h}");
    }
}
