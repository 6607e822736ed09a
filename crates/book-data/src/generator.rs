//! Deterministic book and review generation.
//!
//! This module provides the core generation functions. Each call validates its
//! inputs, derives a seed, creates its own `ChaCha8Rng` and draws every value
//! from that stream in a fixed order. The same inputs always produce identical
//! output, in this process or any other.

use chrono::{Days, Months, NaiveDate};
use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::Name;
use fake::locales::{DE_DE, EN, FR_FR};
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::isbn::draw_isbn;
use crate::likes::ExpectedLikes;
use crate::record::{BookPageQuery, BookRecord, ReviewRecord, page_size};
use crate::region::{FakeLocale, LocaleContent, Region, ReviewTone, TitleWords};
use crate::seed::{book_stream_seed, review_stream_seed, stream_from_seed};

/// Maximum number of reviews generated for a single book.
pub const MAX_REVIEWS_PER_BOOK: u32 = 100;

/// How far back publication dates may reach from the reference date.
const PUBLICATION_WINDOW: Months = Months::new(120);

/// Word count range for filler sentences appended to reviews.
const FILLER_WORDS: std::ops::Range<usize> = 4..10;

/// Generates one page of books.
///
/// The page holds 20 records when `query.page` is zero and 10 otherwise.
/// Publication dates fall within the ten years up to `reference_date`; pin it
/// to make output fully reproducible across days.
///
/// Values are drawn per record in this order: ISBN, title, author, publisher,
/// likes, publication date.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The region is not supported
/// - The expected likes value is negative, non-finite or too large
///
/// # Example
///
/// ```
/// use book_data::{BookPageQuery, generate_books};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
/// let query = BookPageQuery::new("en", 42, 0);
///
/// let books = generate_books(&query, today).expect("generated");
/// assert_eq!(books.len(), 20);
///
/// // Same query produces identical books
/// let again = generate_books(&query, today).expect("generated");
/// assert_eq!(books, again);
/// ```
pub fn generate_books(
    query: &BookPageQuery,
    reference_date: NaiveDate,
) -> Result<Vec<BookRecord>, GenerationError> {
    let region: Region = query.region.parse()?;
    let likes = ExpectedLikes::new(query.expected_likes)?;
    let size = page_size(query.page);
    let first_index = u64::from(query.page) * u64::from(size);

    let mut rng = stream_from_seed(book_stream_seed(query.seed, query.page));
    let context = BookContext {
        content: region.content(),
        likes,
        review_count: query.review_count,
        reference_date,
    };

    let books = (0..u64::from(size))
        .map(|offset| generate_single_book(&mut rng, &context, first_index + offset))
        .collect();

    Ok(books)
}

/// Generates the reviews for one book.
///
/// The stream is seeded from the ISBN alone, so a book's reviews do not depend
/// on the seed or page it was listed on. The region only selects names and
/// templates.
///
/// Values are drawn per review in this order: reviewer name, tone, filler
/// sentence.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The ISBN is empty
/// - The region is not supported
/// - `count` exceeds [`MAX_REVIEWS_PER_BOOK`]
///
/// # Example
///
/// ```
/// use book_data::generate_reviews;
///
/// let reviews = generate_reviews("9780306406157", "fr", 3).expect("generated");
/// assert_eq!(reviews.len(), 3);
/// assert!(generate_reviews("9780306406157", "fr", 0).expect("generated").is_empty());
/// ```
pub fn generate_reviews(
    isbn: &str,
    region: &str,
    count: u32,
) -> Result<Vec<ReviewRecord>, GenerationError> {
    if isbn.is_empty() {
        return Err(GenerationError::EmptyIsbn);
    }
    let parsed: Region = region.parse()?;
    if count > MAX_REVIEWS_PER_BOOK {
        return Err(GenerationError::InvalidReviewCount {
            count,
            max: MAX_REVIEWS_PER_BOOK,
        });
    }

    let content = parsed.content();
    let mut rng = stream_from_seed(review_stream_seed(isbn));
    let reviews = (0..count)
        .map(|_| generate_single_review(&mut rng, content))
        .collect();

    Ok(reviews)
}

/// Per-page values shared by every record on the page.
struct BookContext {
    content: &'static LocaleContent,
    likes: ExpectedLikes,
    review_count: u32,
    reference_date: NaiveDate,
}

/// Generates a single book with the provided RNG.
fn generate_single_book(rng: &mut ChaCha8Rng, context: &BookContext, index: u64) -> BookRecord {
    let locale = context.content.fake_locale;

    let isbn = draw_isbn(rng);
    let title = draw_title(rng, &context.content.title);
    let author = full_name(rng, locale);
    let publisher = company_name(rng, locale);
    let likes = context.likes.sample(rng);
    let published_date = draw_published_date(rng, context.reference_date);

    BookRecord {
        index,
        isbn,
        title,
        authors: vec![author],
        publisher,
        likes,
        review_count: context.review_count,
        published_date,
    }
}

/// Generates a single review with the provided RNG.
fn generate_single_review(rng: &mut ChaCha8Rng, content: &LocaleContent) -> ReviewRecord {
    let user = full_name(rng, content.fake_locale);
    let tone = ReviewTone::ALL
        .choose(rng)
        .copied()
        .unwrap_or(ReviewTone::Recommended);
    let filler = filler_sentence(rng, content.fake_locale);
    let template = content.reviews.for_tone(tone);

    ReviewRecord {
        user,
        text: format!("{template} {filler}"),
    }
}

/// Draws a product-style title: adjective, then material, then product.
fn draw_title(rng: &mut ChaCha8Rng, words: &TitleWords) -> String {
    let adjective = pick_word(rng, words.adjectives);
    let material = pick_word(rng, words.materials);
    let product = pick_word(rng, words.products);
    words.pattern.render(adjective, material, product)
}

fn pick_word(rng: &mut ChaCha8Rng, words: &'static [&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Draws a publication date uniformly from the window ending at `reference`.
fn draw_published_date(rng: &mut ChaCha8Rng, reference: NaiveDate) -> NaiveDate {
    let earliest = reference
        .checked_sub_months(PUBLICATION_WINDOW)
        .unwrap_or(NaiveDate::MIN);
    let span_days = u64::try_from((reference - earliest).num_days()).unwrap_or_default();
    let offset = rng.random_range(0..=span_days);
    reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(earliest)
}

fn full_name(rng: &mut ChaCha8Rng, locale: FakeLocale) -> String {
    match locale {
        FakeLocale::English => Name(EN).fake_with_rng(rng),
        FakeLocale::French => Name(FR_FR).fake_with_rng(rng),
        FakeLocale::German => Name(DE_DE).fake_with_rng(rng),
    }
}

fn company_name(rng: &mut ChaCha8Rng, locale: FakeLocale) -> String {
    match locale {
        FakeLocale::English => CompanyName(EN).fake_with_rng(rng),
        FakeLocale::French => CompanyName(FR_FR).fake_with_rng(rng),
        FakeLocale::German => CompanyName(DE_DE).fake_with_rng(rng),
    }
}

fn filler_sentence(rng: &mut ChaCha8Rng, locale: FakeLocale) -> String {
    match locale {
        FakeLocale::English => Sentence(EN, FILLER_WORDS).fake_with_rng(rng),
        FakeLocale::French => Sentence(FR_FR, FILLER_WORDS).fake_with_rng(rng),
        FakeLocale::German => Sentence(DE_DE, FILLER_WORDS).fake_with_rng(rng),
    }
}
