//! Handwriting ink payloads in the Google Input Tools wire format.
//!
//! ```json
//! {"device": "...", "options": "enable_pre_space",
//!  "requests": [{"writing_guide": {"writing_area_width": 300, "writing_area_height": 300},
//!                "ink": [[[x0, x1], [y0, y1], [t0, t1]]], "language": "ja"}]}
//! ```

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::InkError;

/// Strokes with fewer points than this cannot be recognized.
pub const MIN_STROKE_POINTS: usize = 2;

const DEFAULT_OPTIONS: &str = "enable_pre_space";
const DEFAULT_LANGUAGE: &str = "ja";

/// A full recognition payload.
///
/// Fields the recognizer accepts but this type does not model are kept in
/// `extra` and forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkPayload {
    #[serde(default)]
    pub device: String,
    #[serde(default = "default_options")]
    pub options: String,
    pub requests: Vec<InkRequest>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One recognition request inside a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InkRequest {
    pub writing_guide: WritingGuide,
    pub ink: Vec<Stroke>,
    #[serde(default = "default_language")]
    pub language: String,
    /// e.g. `max_num_results`, `pre_context`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dimensions of the writing area the strokes were captured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingGuide {
    pub writing_area_width: u32,
    pub writing_area_height: u32,
}

/// One stroke as three parallel sequences: x, y and timestamps in ms.
///
/// Serialized as `[[x...], [y...], [t...]]`. The timestamp row may be
/// omitted on input, in which case it is zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>")]
pub struct Stroke {
    xs: Vec<i64>,
    ys: Vec<i64>,
    ts: Vec<i64>,
}

/// A captured canvas point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the stroke started, when known.
    pub t: Option<f64>,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, t: None }
    }

    #[must_use]
    pub fn at(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t: Some(t) }
    }
}

impl Stroke {
    /// Build a stroke from canvas points, rounding to whole pixels.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            xs: points.iter().map(|p| round(p.x)).collect(),
            ys: points.iter().map(|p| round(p.y)).collect(),
            ts: points.iter().map(|p| p.t.map_or(0, round)).collect(),
        }
    }

    /// Number of captured points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// True when the stroke has enough points to be recognized.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.len() >= MIN_STROKE_POINTS
    }

    #[must_use]
    pub fn xs(&self) -> &[i64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[i64] {
        &self.ys
    }

    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.ts
    }
}

impl Serialize for Stroke {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.xs, &self.ys, &self.ts).serialize(serializer)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Stroke {
    type Error = InkError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        let mut rows = rows.into_iter();
        let (Some(xs), Some(ys)) = (rows.next(), rows.next()) else {
            return Err(InkError::MalformedStroke(
                "expected x and y coordinate rows".into(),
            ));
        };
        let ts = rows.next();
        if rows.next().is_some() {
            return Err(InkError::MalformedStroke(
                "expected at most three rows".into(),
            ));
        }
        if xs.len() != ys.len() {
            return Err(InkError::MalformedStroke(format!(
                "{} x coordinates but {} y coordinates",
                xs.len(),
                ys.len()
            )));
        }

        let ts = match ts {
            Some(ts) if ts.len() == xs.len() => ts.into_iter().map(round).collect(),
            Some(ts) if !ts.is_empty() => {
                return Err(InkError::MalformedStroke(format!(
                    "{} points but {} timestamps",
                    xs.len(),
                    ts.len()
                )));
            }
            _ => vec![0; xs.len()],
        };

        Ok(Self {
            xs: xs.into_iter().map(round).collect(),
            ys: ys.into_iter().map(round).collect(),
            ts,
        })
    }
}

impl InkPayload {
    /// Build a single-request Japanese payload from captured point lists.
    ///
    /// Strokes below [`MIN_STROKE_POINTS`] are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::NoUsableStrokes`] if no stroke survives.
    pub fn from_points(
        device: impl Into<String>,
        strokes: &[Vec<Point>],
        width: u32,
        height: u32,
    ) -> Result<Self, InkError> {
        let payload = Self {
            device: device.into(),
            options: default_options(),
            requests: vec![InkRequest {
                writing_guide: WritingGuide {
                    writing_area_width: width,
                    writing_area_height: height,
                },
                ink: strokes.iter().map(|s| Stroke::from_points(s)).collect(),
                language: default_language(),
                extra: Map::new(),
            }],
            extra: Map::new(),
        };
        payload.into_usable()
    }

    /// Parse a payload from a request body.
    ///
    /// # Errors
    ///
    /// Returns [`InkError::Unparsable`] when the body is not JSON or does
    /// not have the payload shape.
    pub fn from_slice(body: &[u8]) -> Result<Self, InkError> {
        serde_json::from_slice(body).map_err(|e| InkError::Unparsable(e.to_string()))
    }

    /// Drop unusable strokes and reject payloads with nothing left to recognize.
    ///
    /// # Errors
    ///
    /// [`InkError::MissingRequest`] when there are no requests,
    /// [`InkError::NoUsableStrokes`] when every stroke is too short.
    pub fn into_usable(mut self) -> Result<Self, InkError> {
        if self.requests.is_empty() {
            return Err(InkError::MissingRequest);
        }
        for request in &mut self.requests {
            request.ink.retain(Stroke::is_usable);
        }
        if self.usable_strokes() == 0 {
            return Err(InkError::NoUsableStrokes);
        }
        Ok(self)
    }

    /// Total number of usable strokes across requests.
    #[must_use]
    pub fn usable_strokes(&self) -> usize {
        self.requests
            .iter()
            .flat_map(|r| r.ink.iter())
            .filter(|s| s.is_usable())
            .count()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round(v: f64) -> i64 {
    v.round() as i64
}

fn default_options() -> String {
    DEFAULT_OPTIONS.into()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.into()
}
