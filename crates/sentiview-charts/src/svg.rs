//! Thin SVG document builder over the XML event writer.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::ChartError;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Anchor {
    Start,
    Middle,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
        }
    }
}

/// Builds one `<svg>` document with a white background.
pub(crate) struct SvgBuilder {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl SvgBuilder {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: u32, height: u32) -> Result<Self, ChartError> {
        let mut builder = Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        };
        builder.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
        svg.push_attribute(("width", width.to_string().as_str()));
        svg.push_attribute(("height", height.to_string().as_str()));
        svg.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
        builder.emit(Event::Start(svg))?;

        builder.rect(0.0, 0.0, width as f32, height as f32, "white")?;
        Ok(builder)
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), ChartError> {
        self.writer
            .write_event(event)
            .map_err(|e| ChartError::Svg(e.to_string()))
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str) -> Result<(), ChartError> {
        let mut el = BytesStart::new("rect");
        el.push_attribute(("x", fmt(x).as_str()));
        el.push_attribute(("y", fmt(y).as_str()));
        el.push_attribute(("width", fmt(w).as_str()));
        el.push_attribute(("height", fmt(h).as_str()));
        el.push_attribute(("fill", fill));
        self.emit(Event::Empty(el))
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), ChartError> {
        let mut el = BytesStart::new("line");
        el.push_attribute(("x1", fmt(x1).as_str()));
        el.push_attribute(("y1", fmt(y1).as_str()));
        el.push_attribute(("x2", fmt(x2).as_str()));
        el.push_attribute(("y2", fmt(y2).as_str()));
        el.push_attribute(("stroke", "#333333"));
        el.push_attribute(("stroke-width", "1"));
        self.emit(Event::Empty(el))
    }

    pub fn path(&mut self, d: &str, fill: &str) -> Result<(), ChartError> {
        let mut el = BytesStart::new("path");
        el.push_attribute(("d", d));
        el.push_attribute(("fill", fill));
        el.push_attribute(("stroke", "white"));
        el.push_attribute(("stroke-width", "1"));
        self.emit(Event::Empty(el))
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, fill: &str) -> Result<(), ChartError> {
        let mut el = BytesStart::new("circle");
        el.push_attribute(("cx", fmt(cx).as_str()));
        el.push_attribute(("cy", fmt(cy).as_str()));
        el.push_attribute(("r", fmt(r).as_str()));
        el.push_attribute(("fill", fill));
        self.emit(Event::Empty(el))
    }

    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        fill: &str,
        anchor: Anchor,
        bold: bool,
        content: &str,
    ) -> Result<(), ChartError> {
        let mut el = BytesStart::new("text");
        el.push_attribute(("x", fmt(x).as_str()));
        el.push_attribute(("y", fmt(y).as_str()));
        el.push_attribute(("font-family", FONT_FAMILY));
        el.push_attribute(("font-size", fmt(size).as_str()));
        el.push_attribute(("fill", fill));
        el.push_attribute(("text-anchor", anchor.as_str()));
        if bold {
            el.push_attribute(("font-weight", "bold"));
        }
        self.emit(Event::Start(el))?;
        self.emit(Event::Text(BytesText::new(content)))?;
        self.emit(Event::End(BytesEnd::new("text")))
    }

    /// Centered chart title near the top edge.
    #[allow(clippy::cast_precision_loss)]
    pub fn title(&mut self, width: u32, content: &str) -> Result<(), ChartError> {
        self.text(
            width as f32 / 2.0,
            28.0,
            18.0,
            "#333333",
            Anchor::Middle,
            true,
            content,
        )
    }

    pub fn finish(mut self) -> Result<String, ChartError> {
        self.emit(Event::End(BytesEnd::new("svg")))?;
        let bytes = self.writer.into_inner().into_inner();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn fmt(value: f32) -> String {
    format!("{value:.1}")
}
