use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::compose::{wrap_block, BlockDefaults, BlockFrame, BlockSize};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::heading::{FontWeight, Heading, HeadingLevel, HeadingSize};
use crate::components::layout::{Grid, GridCols, Stack};
use crate::components::text::{Text, TextVariant};
use crate::components::tokens::{Background, Gap, Tone};
use crate::components::Render;
use crate::error::{Error, MissingFieldError};
use crate::render::{Element, Node};
use crate::style::StyleDirective::Class;
use crate::style::ComponentStyleSpec;

use super::{card, section_header};

token_enum! {
    pub enum PricingVariant ("pricing variant") {
        Cards => "cards",
        Table => "table",
        Simple => "simple",
    }
    default Cards
}

pub static PRICING_STYLE: ComponentStyleSpec = ComponentStyleSpec {
    component: "PricingBlock",
    base: &[Class("w-full")],
    axes: &[
        axis!("variant" default "cards" {
            "cards" => [],
            "table" => [Class("overflow-x-auto")],
            "simple" => [Class("text-center")],
        }),
        axis!("size" default "md" {
            "sm" => [],
            "md" => [],
            "lg" => [],
            "xl" => [],
        }),
    ],
};

const DEFAULTS: BlockDefaults = BlockDefaults {
    size: BlockSize::Md,
    tone: Tone::Default,
    background: Background::Default,
};

const FREE: &str = "Gratuit";
const CHOOSE: &str = "Choisir";
const CHOOSE_PLAN: &str = "Choisir ce plan";
const FEATURES_HEADING: &str = "Fonctionnalités";

fn default_currency() -> String {
    "€".to_string()
}

fn default_period() -> String {
    "mois".to_string()
}

/// What a plan offers for one feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Included(bool),
    Number(f64),
    Text(String),
}

impl FeatureValue {
    fn render(value: Option<&FeatureValue>) -> Node {
        match value {
            Some(FeatureValue::Included(true)) => Element::new("span")
                .class("w-5 h-5 text-green-500")
                .attr("aria-label", "included")
                .child("✓"),
            Some(FeatureValue::Included(false)) => Element::new("span")
                .class("w-5 h-5 text-red-500")
                .attr("aria-label", "not included")
                .child("✗"),
            Some(FeatureValue::Number(n)) => Element::new("span")
                .class("font-medium")
                .child(n.to_string()),
            Some(FeatureValue::Text(text)) => {
                Element::new("span").class("font-medium").child(text.as_str())
            }
            None => Element::new("span").class("text-muted-foreground").child("-"),
        }
        .into()
    }
}

/// Plan features keyed by feature key, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanFeatures(pub Vec<(String, FeatureValue)>);

impl PlanFeatures {
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'de> Deserialize<'de> for PlanFeatures {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeaturesVisitor;

        impl<'de> Visitor<'de> for FeaturesVisitor {
            type Value = PlanFeatures;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of feature keys to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, FeatureValue>()? {
                    entries.push((key, value));
                }
                Ok(PlanFeatures(entries))
            }
        }

        deserializer.deserialize_map(FeaturesVisitor)
    }
}

/// `fastSupport` -> `fast support`.
fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlanCta {
    #[serde(default)]
    pub text: Option<String>,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Plan {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub features: PlanFeatures,
    #[serde(default)]
    pub cta: Option<PlanCta>,
}

impl Plan {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            description: None,
            badge: None,
            popular: false,
            features: PlanFeatures::default(),
            cta: None,
        }
    }

    fn button(&self, size: ButtonSize, fallback_text: &str) -> Result<Node, Error> {
        let (text, href) = match &self.cta {
            Some(cta) => (cta.text.as_deref().unwrap_or(fallback_text), cta.href.as_str()),
            None => (fallback_text, "#"),
        };
        let variant = if self.popular {
            ButtonVariant::Default
        } else {
            ButtonVariant::Outline
        };
        Button::new(text)
            .variant(variant)
            .size(size)
            .href(href)
            .class("w-full")
            .render()
    }

    fn badge(&self, extra: &str) -> Option<Element> {
        self.badge
            .as_deref()
            .map(|badge| card::badge(badge, self.popular, extra))
    }
}

/// A row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureRow {
    pub key: String,
    pub name: String,
}

/// Plans as cards, a comparison table or a plain list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBlock {
    #[serde(default)]
    pub variant: PricingVariant,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub eyebrow: Option<String>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    /// Rows of the `table` variant.
    #[serde(default)]
    pub features: Vec<FeatureRow>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(flatten)]
    pub frame: BlockFrame,
}

impl Default for PricingBlock {
    fn default() -> Self {
        Self {
            variant: PricingVariant::default(),
            title: None,
            subtitle: None,
            eyebrow: None,
            plans: Vec::new(),
            features: Vec::new(),
            currency: default_currency(),
            period: default_period(),
            frame: BlockFrame::default(),
        }
    }
}

impl PricingBlock {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self {
            plans,
            ..Self::default()
        }
    }

    /// `Gratuit` for a free plan, else `€29` followed by a `/mois` suffix.
    fn price(&self, plan: &Plan, amount_class: &'static str, suffix_class: &'static str) -> Element {
        let amount = Element::new("div").class(amount_class);
        if plan.price == 0.0 {
            return amount.child(FREE);
        }
        amount
            .child(format!("{}{}", self.currency, plan.price))
            .child(
                Element::new("span")
                    .class(suffix_class)
                    .child(format!("/{}", self.period)),
            )
    }

    fn cards(&self) -> Result<Node, Error> {
        let columns = u8::try_from(self.plans.len().min(4)).unwrap_or(4);
        let cards = self
            .plans
            .iter()
            .map(|plan| self.card(plan))
            .collect::<Result<Vec<_>, _>>()?;
        Grid::new(GridCols::try_from(columns)?)
            .gap(Gap::Lg)
            .children(cards)
            .render()
    }

    fn card(&self, plan: &Plan) -> Result<Node, Error> {
        let shell = if plan.popular {
            "relative h-full border-primary shadow-lg"
        } else {
            "relative h-full"
        };
        let ribbon = plan.badge("").filter(|_| plan.popular).map(|badge| {
            Element::new("div")
                .class("absolute -top-3 left-1/2 -translate-x-1/2")
                .child(badge)
        });
        let description = plan
            .description
            .as_deref()
            .map(|d| Text::new(d).variant(TextVariant::Muted).class("mt-2").render())
            .transpose()?;
        let header = card::header("text-center pb-4")
            .child(card::title(&plan.name, "text-xl"))
            .child(
                Element::new("div")
                    .class("mt-4")
                    .child(self.price(plan, "text-4xl font-bold", "text-lg font-normal text-muted-foreground")),
            )
            .child_opt(description);

        let features = if plan.features.is_empty() {
            None
        } else {
            let rows = plan
                .features
                .iter()
                .map(|(key, value)| {
                    Ok(Element::new("div")
                        .class("flex items-center gap-2")
                        .child(FeatureValue::render(Some(value)))
                        .child(
                            Text::new(humanize_key(key))
                                .variant(TextVariant::Small)
                                .render()?,
                        )
                        .into())
                })
                .collect::<Result<Vec<Node>, Error>>()?;
            Some(Stack::new().gap(Gap::Sm).class("mb-6").children(rows).render()?)
        };
        let content = card::content("pt-0")
            .child_opt(features)
            .child(plan.button(ButtonSize::Lg, CHOOSE_PLAN)?);

        Ok(card::card(shell)
            .child_opt(ribbon)
            .child(header)
            .child(content)
            .into())
    }

    fn table(&self) -> Result<Node, Error> {
        let mut head = Element::new("tr").class("border-b bg-muted/50").child(
            Element::new("th")
                .class("p-4 text-left font-medium")
                .child(FEATURES_HEADING),
        );
        for plan in &self.plans {
            head = head.child(
                Element::new("th").class("p-4 text-center min-w-[200px]").child(
                    Element::new("div")
                        .class("space-y-2")
                        .child_opt(plan.badge("mb-2"))
                        .child(Element::new("div").class("font-bold text-lg").child(plan.name.as_str()))
                        .child(self.price(plan, "text-2xl font-bold", "text-sm font-normal text-muted-foreground"))
                        .child(plan.button(ButtonSize::Sm, CHOOSE)?),
                ),
            );
        }

        let rows = self.features.iter().map(|feature| {
            Element::new("tr")
                .class("border-b hover:bg-muted/25")
                .child(
                    Element::new("td")
                        .class("p-4 font-medium")
                        .child(feature.name.as_str()),
                )
                .children(self.plans.iter().map(|plan| {
                    Element::new("td")
                        .class("p-4 text-center")
                        .child(FeatureValue::render(plan.features.get(&feature.key)))
                }))
        });

        let table = Element::new("table")
            .class("w-full")
            .child(Element::new("thead").child(head))
            .child(Element::new("tbody").children(rows));
        Ok(Element::new("div")
            .class("border rounded-lg overflow-hidden")
            .child(Element::new("div").class("overflow-x-auto").child(table))
            .into())
    }

    fn simple(&self) -> Result<Node, Error> {
        let mut list = Element::new("div").class("flex flex-wrap justify-center gap-8");
        for plan in &self.plans {
            let description = plan
                .description
                .as_deref()
                .map(|d| Text::new(d).variant(TextVariant::Muted).class("mb-4").render())
                .transpose()?;
            list = list.child(
                Element::new("div")
                    .class("text-center max-w-xs")
                    .child_opt(plan.badge("mb-3"))
                    .child(
                        Heading::new(HeadingLevel::H3, plan.name.as_str())
                            .size(HeadingSize::Xl)
                            .weight(FontWeight::Semibold)
                            .class("mb-2")
                            .render()?,
                    )
                    .child(
                        Element::new("div")
                            .class("mb-4")
                            .child(self.price(plan, "text-3xl font-bold", "text-lg font-normal text-muted-foreground")),
                    )
                    .child_opt(description)
                    .child(plan.button(ButtonSize::Lg, CHOOSE)?),
            );
        }
        Ok(list.into())
    }
}

impl Render for PricingBlock {
    fn render(&self) -> Result<Node, Error> {
        if self.plans.is_empty() {
            return Err(MissingFieldError::new("PricingBlock", "plans").into());
        }
        let header = section_header(
            self.title.as_deref(),
            self.subtitle.as_deref(),
            self.eyebrow.as_deref(),
        )?;
        let layout = match self.variant {
            PricingVariant::Cards => self.cards()?,
            PricingVariant::Table => self.table()?,
            PricingVariant::Simple => self.simple()?,
        };
        let root = self
            .frame
            .content_root(&PRICING_STYLE, self.variant.as_str(), &DEFAULTS)?
            .child_opt(header)
            .child(layout);
        wrap_block(root.into(), &self.frame, &DEFAULTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
plans:
  - name: Starter
    price: 0
    features: { projects: 3, fastSupport: false }
  - name: Pro
    price: 29
    popular: true
    badge: Populaire
    features: { projects: "illimité", fastSupport: true }
    cta: { href: /signup }
features:
  - { key: projects, name: Projets }
  - { key: fastSupport, name: Support prioritaire }
  - { key: sso, name: SSO }
"#;

    fn block() -> PricingBlock {
        serde_yaml::from_str(YAML).unwrap()
    }

    #[test]
    fn test_empty_plans_is_an_error() {
        let err = PricingBlock::default().render().unwrap_err();
        assert_eq!(err.to_string(), "PricingBlock requires 'plans'");
    }

    #[test]
    fn test_defaults_from_yaml() {
        let block = block();
        assert_eq!(block.currency, "€");
        assert_eq!(block.period, "mois");
        assert_eq!(block.plans[0].features.get("projects"), Some(&FeatureValue::Number(3.0)));
        let keys: Vec<_> = block.plans[1].features.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["projects", "fastSupport"]);
    }

    #[test]
    fn test_cards_columns_follow_plan_count() {
        let node = block().render().unwrap();
        assert!(node.find_by_attr("data-cols", "2").is_some());
        let text = node.text_content();
        assert!(text.contains(FREE));
        assert!(text.contains("€29/mois"));
        assert!(text.contains("fast support"));
    }

    #[test]
    fn test_popular_plan_gets_filled_button_and_ribbon() {
        let node = block().render().unwrap();
        let signup = node.find_by_attr("href", "/signup").unwrap();
        assert_eq!(signup.get_attr("data-variant"), Some("default"));
        assert_eq!(Node::from(signup.clone()).text_content(), CHOOSE_PLAN);
        let other = node.find_by_attr("href", "#").unwrap();
        assert_eq!(other.get_attr("data-variant"), Some("outline"));
        assert_eq!(node.find_all(|e| e.has_class("-translate-x-1/2")).len(), 1);
    }

    #[test]
    fn test_table_marks_missing_features() {
        let block = PricingBlock {
            variant: PricingVariant::Table,
            ..block()
        };
        let node = block.render().unwrap();
        assert_eq!(node.find_all(|e| e.tag == "tr").len(), 4);
        assert_eq!(node.find_all(|e| e.get_attr("aria-label") == Some("included")).len(), 1);
        assert_eq!(
            node.find_all(|e| e.get_attr("aria-label") == Some("not included")).len(),
            1
        );
        let dashes = node.find_all(|e| e.tag == "td" && Node::from((*e).clone()).text_content() == "-");
        assert_eq!(dashes.len(), 2);
    }

    #[test]
    fn test_five_plans_cap_at_four_columns() {
        let plans = (0..5).map(|i| Plan::new(format!("P{i}"), 10.0)).collect();
        let node = PricingBlock::new(plans).render().unwrap();
        assert!(node.find_by_attr("data-cols", "4").is_some());
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("fastSupport"), "fast support");
        assert_eq!(humanize_key("projects"), "projects");
    }
}
