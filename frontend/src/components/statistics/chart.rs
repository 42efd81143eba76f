use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::stats::{parse_color, CATEGORY_COLORS};

const COMPONENT: &str = "StatisticsChart";
const FALLBACK_COLOR: (u8, u8, u8) = (150, 150, 150);

#[derive(Properties, PartialEq)]
pub struct StatisticsChartProps {
    /// Expense sum per category, as produced by the aggregation engine.
    pub breakdown: Vec<(String, f64)>,
}

pub enum Msg {}

/// Doughnut chart of the expense breakdown, drawn on a canvas.
pub struct StatisticsChart {
    canvas_ref: NodeRef,
}

impl Component for StatisticsChart {
    type Message = Msg;
    type Properties = StatisticsChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().breakdown != old_props.breakdown {
            self.draw(&ctx.props().breakdown);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().breakdown);
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="statistics-chart">
                <canvas ref={self.canvas_ref.clone()} width="320" height="320" />
            </div>
        }
    }
}

impl StatisticsChart {
    fn draw(&self, breakdown: &[(String, f64)]) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        if let Err(message) = draw_doughnut(canvas, breakdown) {
            Logger::error_with_component(COMPONENT, &message);
        }
    }
}

fn category_rgb(category: &str) -> RGBColor {
    let (red, green, blue) = CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .and_then(|(_, color)| parse_color(color))
        .unwrap_or(FALLBACK_COLOR);
    RGBColor(red, green, blue)
}

fn draw_doughnut(canvas: HtmlCanvasElement, breakdown: &[(String, f64)]) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "Failed to acquire canvas backend".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    if breakdown.is_empty() {
        root.draw(&Text::new(
            "No expenses for this period",
            (70, 155),
            ("sans-serif", 16).into_font().color(&BLACK.mix(0.6)),
        ))
        .map_err(|e| e.to_string())?;
        return root.present().map_err(|e| e.to_string());
    }

    let sizes: Vec<f64> = breakdown.iter().map(|(_, sum)| *sum).collect();
    let colors: Vec<RGBColor> = breakdown
        .iter()
        .map(|(category, _)| category_rgb(category))
        .collect();
    let labels: Vec<String> = breakdown.iter().map(|(category, _)| category.clone()).collect();

    let center = (160, 160);
    let radius = 130.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 12).into_font());
    root.draw(&pie).map_err(|e| e.to_string())?;

    // Hollow middle turns the pie into a doughnut.
    root.draw(&Circle::new(center, 60, WHITE.filled()))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}
