//! Built-in category keyword table.
//!
//! Used when no `--categories` file is supplied. Keywords are matched as
//! lower-case substrings of the URL/title text, so short keywords match
//! inside longer words.

pub(crate) const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["tech", "software", "gadget", "computer", "digital", "app", "code", "developer"],
    ),
    (
        "Health",
        &["health", "medical", "doctor", "clinic", "wellness", "pharma", "hospital"],
    ),
    (
        "Fitness",
        &["fitness", "gym", "workout", "yoga", "exercise", "bodybuilding"],
    ),
    (
        "Finance",
        &["finance", "money", "invest", "bank", "loan", "credit", "crypto", "stock", "insurance"],
    ),
    (
        "Business",
        &["business", "startup", "entrepreneur", "marketing", "company", "corporate"],
    ),
    (
        "E-commerce",
        &["shop", "store", "buy", "deal", "cart", "coupon", "discount", "sale"],
    ),
    (
        "Travel",
        &["travel", "tour", "hotel", "flight", "vacation", "trip", "holiday", "destination"],
    ),
    (
        "Food",
        &["food", "recipe", "cook", "restaurant", "kitchen", "baking", "chef"],
    ),
    (
        "Education",
        &["education", "school", "university", "course", "learn", "tutor", "academy", "college"],
    ),
    (
        "Fashion",
        &["fashion", "style", "clothing", "wear", "dress", "outfit", "apparel"],
    ),
    (
        "Beauty",
        &["beauty", "makeup", "skincare", "cosmetic", "salon", "hair"],
    ),
    (
        "Sports",
        &["sport", "football", "soccer", "cricket", "tennis", "basketball", "golf"],
    ),
    (
        "Gaming",
        &["game", "gaming", "esports", "console", "playstation", "xbox"],
    ),
    (
        "Entertainment",
        &["movie", "film", "music", "celebrity", "entertainment", "tv", "series"],
    ),
    (
        "News",
        &["news", "daily", "times", "journal", "press", "headline"],
    ),
    (
        "Real Estate",
        &["realestate", "real-estate", "property", "realty", "housing", "apartment", "mortgage"],
    ),
    (
        "Automotive",
        &["auto", "car", "motor", "vehicle", "bike", "truck"],
    ),
    (
        "Home & Garden",
        &["home", "garden", "decor", "furniture", "interior", "diy"],
    ),
    (
        "Law",
        &["law", "legal", "attorney", "lawyer", "court", "solicitor"],
    ),
    (
        "Pets",
        &["pet", "dog", "cat", "puppy", "animal", "vet"],
    ),
    (
        "Parenting",
        &["parent", "baby", "kids", "mom", "family", "child"],
    ),
    (
        "Photography",
        &["photo", "camera", "lens", "portrait", "snapshot"],
    ),
    (
        "Blog",
        &["blog", "diary", "thoughts", "personal", "medium"],
    ),
    (
        "Marketing & SEO",
        &["seo", "backlink", "serp", "keyword", "adwords", "affiliate"],
    ),
    (
        "Wedding",
        &["wedding", "bride", "bridal", "marriage", "engagement"],
    ),
    (
        "Environment",
        &["green", "eco", "climate", "solar", "sustainab", "renewable"],
    ),
];
