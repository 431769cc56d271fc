// src/catalogue/listing.rs
// =============================================================================
// Splits one listing page into raw item fragments.
//
// The markup of a listing page looks like this (trimmed):
//
//   <ol class="row">
//     <li>
//       <article class="product_pod">
//         <p class="star-rating Three">...</p>
//         <h3><a href="a-light-in-the-attic_1000/index.html"
//                title="A Light in the Attic">A Light in the ...</a></h3>
//         <div class="product_price">
//           <p class="price_color">£51.77</p>
//           <p class="instock availability">In stock</p>
//         </div>
//       </article>
//     </li>
//     ...
//   </ol>
//   <ul class="pager">
//     <li class="current">Page 1 of 50</li>
//     <li class="next"><a href="page-2.html">next</a></li>
//   </ul>
//
// This is the only place in the crate that knows those class names.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

const LISTING: &str = "ol.row";
const ITEM: &str = "article.product_pod";
const TITLE_LINK: &str = "h3 a";
const PRICE: &str = "p.price_color";
const RATING: &str = "p.star-rating";
const RATING_MARKER: &str = "star-rating";
const AVAILABILITY: &str = "p.availability";
const NEXT_PAGE: &str = "ul.pager li.next a[href]";

/// The raw, un-normalized pieces of one item, as found in the markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFragment {
    /// `title` attribute of the heading link (the full title)
    pub title: Option<String>,
    /// Visible text of the heading link (may be truncated with "...")
    pub label: String,
    pub href: Option<String>,
    pub price_text: Option<String>,
    /// Classes of the rating paragraph other than `star-rating`
    pub rating_tokens: Vec<String>,
    pub availability_text: Option<String>,
}

/// One parsed listing page.
#[derive(Debug)]
pub struct Listing {
    fragments: std::vec::IntoIter<ItemFragment>,
    has_next: bool,
}

impl Listing {
    /// Whether the page links to a further page.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the listing; fragments come out in document order.
    pub fn into_fragments(self) -> std::vec::IntoIter<ItemFragment> {
        self.fragments
    }
}

/// Compiled selectors for the catalogue markup. Build it once per crawl.
#[derive(Debug)]
pub struct ListingParser {
    listing: Selector,
    item: Selector,
    title_link: Selector,
    price: Selector,
    rating: Selector,
    availability: Selector,
    next_page: Selector,
}

fn compile(selector: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::Selector {
        selector,
        message: e.to_string(),
    })
}

impl ListingParser {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            listing: compile(LISTING)?,
            item: compile(ITEM)?,
            title_link: compile(TITLE_LINK)?,
            price: compile(PRICE)?,
            rating: compile(RATING)?,
            availability: compile(AVAILABILITY)?,
            next_page: compile(NEXT_PAGE)?,
        })
    }

    /// Parses one page of HTML.
    ///
    /// An empty listing container is a valid page with zero items. A page with
    /// no container and no items at all is a `ParseError`.
    pub fn parse(&self, html: &str) -> Result<Listing, ParseError> {
        let document = Html::parse_document(html);

        let fragments: Vec<ItemFragment> = document
            .select(&self.item)
            .map(|article| self.fragment(article))
            .collect();

        if fragments.is_empty() && document.select(&self.listing).next().is_none() {
            return Err(ParseError::MissingListing { selector: LISTING });
        }

        let has_next = document.select(&self.next_page).next().is_some();

        Ok(Listing {
            fragments: fragments.into_iter(),
            has_next,
        })
    }

    fn fragment(&self, article: ElementRef<'_>) -> ItemFragment {
        let mut fragment = ItemFragment::default();

        if let Some(link) = article.select(&self.title_link).next() {
            fragment.title = link.value().attr("title").map(str::to_string);
            fragment.href = link.value().attr("href").map(str::to_string);
            fragment.label = text_of(link);
        }

        fragment.price_text = article.select(&self.price).next().map(text_of);

        if let Some(rating) = article.select(&self.rating).next() {
            fragment.rating_tokens = rating
                .value()
                .classes()
                .filter(|class| *class != RATING_MARKER)
                .map(str::to_string)
                .collect();
        }

        fragment.availability_text = article.select(&self.availability).next().map(text_of);

        fragment
    }
}

// Text content with runs of whitespace collapsed to one space.
fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
