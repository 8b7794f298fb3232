// File: crates/chart-data/src/layout.rs
// Summary: X axis label composer: stacks content, label row and title by configured position.

use tracing::{debug, trace};

use crate::axis::XAxisLabelPosition;
use crate::chart::LineBarChartData;

/// Row of x-axis labels, left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisLabelsView {
    pub labels: Vec<String>,
}

impl AxisLabelsView {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisTitleView {
    pub text: String,
}

impl AxisTitleView {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub edge: Edge,
    pub amount: f32,
}

/// One child of a composed stack.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<C> {
    Content(C),
    /// Padded on the edge that faces the content.
    Labels { view: AxisLabelsView, padding: Padding },
    /// Always present so the stack keeps its shape; empty when no title is set.
    Title(Option<AxisTitleView>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    Content,
    Labels,
    Title,
}

impl<C> Slot<C> {
    pub fn kind(&self) -> SlotKind {
        match self {
            Slot::Content(_) => SlotKind::Content,
            Slot::Labels { .. } => SlotKind::Labels,
            Slot::Title(_) => SlotKind::Title,
        }
    }
}

/// Vertical stack, first child topmost.
#[derive(Clone, Debug, PartialEq)]
pub struct VStack<C> {
    pub children: Vec<Slot<C>>,
}

impl<C> VStack<C> {
    pub fn kinds(&self) -> Vec<SlotKind> {
        self.children.iter().map(Slot::kind).collect()
    }

    pub fn content(&self) -> Option<&C> {
        self.children.iter().find_map(|slot| match slot {
            Slot::Content(content) => Some(content),
            _ => None,
        })
    }

    pub fn labels(&self) -> Option<&AxisLabelsView> {
        self.children.iter().find_map(|slot| match slot {
            Slot::Labels { view, .. } => Some(view),
            _ => None,
        })
    }

    pub fn into_content(self) -> Option<C> {
        self.children.into_iter().find_map(|slot| match slot {
            Slot::Content(content) => Some(content),
            _ => None,
        })
    }
}

/// Decorates chart content with the x-axis label row and title.
///
/// Only line/bar family charts can be attached:
///
/// ```compile_fail
/// use chart_data::{DataSet, PieChartData, PieDataPoint, XAxisLabels};
///
/// let mut pie = PieChartData::new(DataSet::new(vec![PieDataPoint::new(1.0)]));
/// let _ = XAxisLabels::attach(&mut pie);
/// ```
pub struct XAxisLabels<'a, T: LineBarChartData> {
    chart: &'a T,
}

impl<'a, T: LineBarChartData> XAxisLabels<'a, T> {
    /// Register on the chart that x-axis labels are present, then hold it for composition.
    pub fn attach(chart: &'a mut T) -> Self {
        if chart.enable_x_axis_labels() {
            debug!(position = ?chart.x_axis_label_position(), "x-axis labels attached");
        } else {
            trace!("x-axis labels already enabled on chart");
        }
        Self { chart }
    }

    pub fn compose<C>(&self, content: C) -> VStack<C> {
        let style = self.chart.chart_style();
        let labels = self.chart.x_axis_label_view();
        let title = Slot::Title(self.chart.x_axis_title_view());

        let children = match self.chart.x_axis_label_position() {
            XAxisLabelPosition::Bottom => vec![
                Slot::Content(content),
                Slot::Labels {
                    view: labels,
                    padding: Padding { edge: Edge::Top, amount: style.label_padding },
                },
                title,
            ],
            XAxisLabelPosition::Top => vec![
                title,
                Slot::Labels {
                    view: labels,
                    padding: Padding { edge: Edge::Bottom, amount: style.label_padding },
                },
                Slot::Content(content),
            ],
        };
        VStack { children }
    }
}

/// `content.x_axis_labels(&mut chart)`: attach and compose in one call.
pub trait XAxisLabelsExt: Sized {
    fn x_axis_labels<T: LineBarChartData>(self, chart: &mut T) -> VStack<Self> {
        XAxisLabels::attach(chart).compose(self)
    }
}

impl<C> XAxisLabelsExt for C {}
