//! Supported regions and their locale content tables.
//!
//! A region selects the language-flavoured name data, title vocabulary and
//! review templates used while generating. Every region owns exactly one
//! [`LocaleContent`] entry; adding a locale means adding a variant and a table
//! entry, not new branches in the generator.
//!
//! The canonical list is `en`, `fr`, `de`, `es`. The `fake` crate ships no
//! Spanish locale, so `es` draws person and company names from the English
//! data while keeping its own titles and review templates.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

/// A region code accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// English (`en`).
    English,
    /// French (`fr`).
    French,
    /// German (`de`).
    German,
    /// Spanish (`es`).
    Spanish,
}

/// Every supported region in canonical order.
pub const SUPPORTED_REGIONS: [Region; 4] = [
    Region::English,
    Region::French,
    Region::German,
    Region::Spanish,
];

impl Region {
    /// Returns the wire code for this region.
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::Region;
    ///
    /// assert_eq!(Region::French.code(), "fr");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::German => "de",
            Self::Spanish => "es",
        }
    }

    /// Returns the codes of all supported regions in canonical order.
    #[must_use]
    pub fn supported_codes() -> Vec<&'static str> {
        SUPPORTED_REGIONS.iter().map(|region| region.code()).collect()
    }

    pub(crate) const fn content(self) -> &'static LocaleContent {
        match self {
            Self::English => &ENGLISH,
            Self::French => &FRENCH,
            Self::German => &GERMAN,
            Self::Spanish => &SPANISH,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = GenerationError;

    /// Parses a region code, rejecting anything outside the canonical list.
    ///
    /// Codes are matched exactly; `EN` and `en-US` are rejected.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        SUPPORTED_REGIONS
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or_else(|| GenerationError::UnsupportedRegion {
                code: code.to_owned(),
                supported: Self::supported_codes(),
            })
    }
}

/// Locale data set from the `fake` crate used for names and filler text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FakeLocale {
    English,
    French,
    German,
}

/// Word order used to assemble a product-style title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TitlePattern {
    /// `{adjective} {material} {product}`
    AdjectiveMaterialProduct,
    /// `{adjective} {product} {connector} {material}`
    AdjectiveProductMaterial { connector: &'static str },
    /// `{product} {adjective} {connector} {material}`
    ProductAdjectiveMaterial { connector: &'static str },
}

impl TitlePattern {
    pub(crate) fn render(self, adjective: &str, material: &str, product: &str) -> String {
        match self {
            Self::AdjectiveMaterialProduct => format!("{adjective} {material} {product}"),
            Self::AdjectiveProductMaterial { connector } => {
                format!("{adjective} {product} {connector} {material}")
            }
            Self::ProductAdjectiveMaterial { connector } => {
                format!("{product} {adjective} {connector} {material}")
            }
        }
    }
}

/// Vocabulary for synthetic titles.
#[derive(Debug)]
pub(crate) struct TitleWords {
    pub(crate) adjectives: &'static [&'static str],
    pub(crate) materials: &'static [&'static str],
    pub(crate) products: &'static [&'static str],
    pub(crate) pattern: TitlePattern,
}

/// The tone of a generated review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReviewTone {
    Enthusiastic,
    Recommended,
    Lukewarm,
}

impl ReviewTone {
    pub(crate) const ALL: [Self; 3] = [Self::Enthusiastic, Self::Recommended, Self::Lukewarm];
}

/// One fixed template per review tone.
#[derive(Debug)]
pub(crate) struct ReviewTemplates {
    enthusiastic: &'static str,
    recommended: &'static str,
    lukewarm: &'static str,
}

impl ReviewTemplates {
    pub(crate) const fn for_tone(&self, tone: ReviewTone) -> &'static str {
        match tone {
            ReviewTone::Enthusiastic => self.enthusiastic,
            ReviewTone::Recommended => self.recommended,
            ReviewTone::Lukewarm => self.lukewarm,
        }
    }
}

/// Everything the generator needs to render records for one region.
#[derive(Debug)]
pub(crate) struct LocaleContent {
    pub(crate) fake_locale: FakeLocale,
    pub(crate) title: TitleWords,
    pub(crate) reviews: ReviewTemplates,
}

static ENGLISH: LocaleContent = LocaleContent {
    fake_locale: FakeLocale::English,
    title: TitleWords {
        adjectives: &[
            "Small",
            "Ergonomic",
            "Rustic",
            "Intelligent",
            "Gorgeous",
            "Incredible",
            "Fantastic",
            "Practical",
            "Sleek",
            "Awesome",
            "Handcrafted",
            "Refined",
            "Unbranded",
            "Licensed",
        ],
        materials: &[
            "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal",
            "Soft", "Fresh", "Frozen",
        ],
        products: &[
            "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
            "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Cheese", "Pizza", "Salad",
        ],
        pattern: TitlePattern::AdjectiveMaterialProduct,
    },
    reviews: ReviewTemplates {
        enthusiastic: "I absolutely love this book!",
        recommended: "Excellent book. Highly recommended!",
        lukewarm: "It's decent but could be improved.",
    },
};

static FRENCH: LocaleContent = LocaleContent {
    fake_locale: FakeLocale::French,
    title: TitleWords {
        adjectives: &[
            "ergonomique",
            "rustique",
            "intelligent",
            "magnifique",
            "fantastique",
            "pratique",
            "artisanal",
            "raffiné",
            "élégant",
            "générique",
        ],
        materials: &[
            "acier",
            "bois",
            "béton",
            "plastique",
            "coton",
            "granit",
            "caoutchouc",
            "métal",
        ],
        products: &[
            "Fauteuil",
            "Clavier",
            "Vélo",
            "Ballon",
            "Chapeau",
            "Savon",
            "Fromage",
            "Pantalon",
            "Ordinateur",
            "Bureau",
            "Tapis",
        ],
        pattern: TitlePattern::ProductAdjectiveMaterial { connector: "en" },
    },
    reviews: ReviewTemplates {
        enthusiastic: "J'adore ce livre!",
        recommended: "Excellent livre. Je le recommande!",
        lukewarm: "Pas mal, mais pourrait être amélioré.",
    },
};

static GERMAN: LocaleContent = LocaleContent {
    fake_locale: FakeLocale::German,
    title: TitleWords {
        adjectives: &[
            "Ergonomisches",
            "Rustikales",
            "Intelligentes",
            "Herrliches",
            "Fantastisches",
            "Praktisches",
            "Handgefertigtes",
            "Elegantes",
            "Generisches",
            "Raffiniertes",
        ],
        materials: &[
            "Stahl",
            "Holz",
            "Beton",
            "Kunststoff",
            "Baumwolle",
            "Granit",
            "Gummi",
            "Metall",
        ],
        products: &[
            "Fahrrad", "Auto", "Hemd", "Handtuch", "Messer", "Kissen", "Regal", "Sofa", "Radio",
            "Tablett",
        ],
        pattern: TitlePattern::AdjectiveProductMaterial { connector: "aus" },
    },
    reviews: ReviewTemplates {
        enthusiastic: "Ich liebe dieses Buch!",
        recommended: "Hervorragendes Buch. Sehr empfehlenswert!",
        lukewarm: "Nicht schlecht, könnte aber verbessert werden.",
    },
};

static SPANISH: LocaleContent = LocaleContent {
    fake_locale: FakeLocale::English,
    title: TitleWords {
        adjectives: &[
            "ergonómico",
            "rústico",
            "inteligente",
            "magnífico",
            "fantástico",
            "práctico",
            "artesanal",
            "refinado",
            "elegante",
            "genérico",
        ],
        materials: &[
            "acero",
            "madera",
            "hormigón",
            "plástico",
            "algodón",
            "granito",
            "caucho",
            "metal",
        ],
        products: &[
            "Sillón",
            "Teclado",
            "Ratón",
            "Balón",
            "Sombrero",
            "Jabón",
            "Queso",
            "Pantalón",
            "Ordenador",
            "Escritorio",
            "Coche",
        ],
        pattern: TitlePattern::ProductAdjectiveMaterial { connector: "de" },
    },
    reviews: ReviewTemplates {
        enthusiastic: "¡Me encanta este libro!",
        recommended: "Excelente libro. ¡Muy recomendado!",
        lukewarm: "No está mal, pero podría mejorar.",
    },
};
