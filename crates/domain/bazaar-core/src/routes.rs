//! Static navigation table. The same entries feed the sidebar and the search
//! box, so there is no separate index.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    /// Title of the top-level entry this one is grouped under.
    pub parent: Option<&'static str>,
}

impl RouteDescriptor {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    fn haystack(&self) -> String {
        let mut text = format!("{} {} {}", self.title, self.description, self.category);
        for kw in self.keywords {
            text.push(' ');
            text.push_str(kw);
        }
        text.to_lowercase()
    }
}

const fn top(
    title: &'static str,
    path: &'static str,
    icon: &'static str,
    description: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
) -> RouteDescriptor {
    RouteDescriptor {
        title,
        path,
        icon,
        description,
        category,
        keywords,
        parent: None,
    }
}

const fn child(
    parent: &'static str,
    title: &'static str,
    path: &'static str,
    icon: &'static str,
    description: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
) -> RouteDescriptor {
    RouteDescriptor {
        title,
        path,
        icon,
        description,
        category,
        keywords,
        parent: Some(parent),
    }
}

pub static ROUTES: &[RouteDescriptor] = &[
    top(
        "Dashboard",
        "/dashboard",
        "\u{25A6}",
        "Sales, revenue and order overview",
        "Overview",
        &["home", "summary", "stats", "analytics"],
    ),
    top(
        "Products",
        "/products",
        "\u{25A3}",
        "Manage the product catalogue",
        "Catalogue",
        &["inventory", "stock", "items"],
    ),
    child(
        "Products",
        "Add Product",
        "/products/add",
        "+",
        "Create a new product listing",
        "Catalogue",
        &["new", "create", "upload"],
    ),
    child(
        "Products",
        "List Products",
        "/products/list",
        "\u{2630}",
        "Browse and edit existing products",
        "Catalogue",
        &["all", "edit", "inventory"],
    ),
    child(
        "Products",
        "Categories",
        "/products/categories",
        "\u{25C7}",
        "Group products into categories",
        "Catalogue",
        &["taxonomy", "collections"],
    ),
    top(
        "Orders",
        "/orders",
        "\u{25A4}",
        "Track and fulfil customer orders",
        "Sales",
        &["purchases", "fulfilment", "shipping"],
    ),
    child(
        "Orders",
        "List Orders",
        "/orders/list",
        "\u{2630}",
        "All orders with their current status",
        "Sales",
        &["pending", "completed", "refunds"],
    ),
    child(
        "Orders",
        "Order Details",
        "/orders/details",
        "\u{25C9}",
        "Inspect the selected order",
        "Sales",
        &["selected", "items", "invoice"],
    ),
    top(
        "Customers",
        "/customers",
        "\u{263A}",
        "Registered shoppers and their activity",
        "People",
        &["users", "accounts", "buyers"],
    ),
    child(
        "Customers",
        "List Customers",
        "/customers/list",
        "\u{2630}",
        "Every registered customer account",
        "People",
        &["users", "accounts"],
    ),
    top(
        "Banners",
        "/banners",
        "\u{25AD}",
        "Homepage promotional slots",
        "Marketing",
        &["promotions", "hero", "slides"],
    ),
    child(
        "Banners",
        "Add Banner",
        "/banners/add",
        "+",
        "Upload a new promotional image",
        "Marketing",
        &["new", "create", "upload", "image"],
    ),
    child(
        "Banners",
        "List Banners",
        "/banners/list",
        "\u{2630}",
        "Reorder or retire existing promotions",
        "Marketing",
        &["all", "edit", "slides"],
    ),
    top(
        "Analytics",
        "/analytics",
        "\u{2197}",
        "Best sellers and status breakdowns",
        "Reports",
        &["reports", "charts", "trends", "best selling"],
    ),
    top(
        "Settings",
        "/settings",
        "\u{2699}",
        "Store configuration and preferences",
        "System",
        &["preferences", "configuration", "account"],
    ),
];

/// Read-only queries over a route table.
#[derive(Debug, Clone, Copy)]
pub struct RouteRegistry {
    routes: &'static [RouteDescriptor],
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}

impl RouteRegistry {
    pub const fn new(routes: &'static [RouteDescriptor]) -> Self {
        Self { routes }
    }

    pub fn all(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// Blank queries return the top-level entries. Anything else is a
    /// case-insensitive substring match over title, description, category
    /// and keywords of every entry, children included.
    pub fn search(&self, query: &str) -> Vec<&'static RouteDescriptor> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.main_nav_items();
        }
        self.routes
            .iter()
            .filter(|r| r.haystack().contains(&needle))
            .collect()
    }

    pub fn main_nav_items(&self) -> Vec<&'static RouteDescriptor> {
        self.routes.iter().filter(|r| r.is_top_level()).collect()
    }

    pub fn sub_items(&self, parent_title: &str) -> Vec<&'static RouteDescriptor> {
        self.routes
            .iter()
            .filter(|r| r.parent == Some(parent_title))
            .collect()
    }

    pub fn find_by_path(&self, path: &str) -> Option<&'static RouteDescriptor> {
        self.routes.iter().find(|r| r.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[&RouteDescriptor]) -> Vec<&'static str> {
        items.iter().map(|r| r.title).collect()
    }

    #[test]
    fn blank_search_returns_top_level_in_declaration_order() {
        let reg = RouteRegistry::default();
        let expected: Vec<_> = ROUTES.iter().filter(|r| r.parent.is_none()).collect();
        assert_eq!(reg.search(""), expected);
        assert_eq!(reg.search("   \t"), expected);
        assert_eq!(
            titles(&reg.search("")),
            vec![
                "Dashboard",
                "Products",
                "Orders",
                "Customers",
                "Banners",
                "Analytics",
                "Settings"
            ]
        );
    }

    #[test]
    fn banner_search_includes_children() {
        let reg = RouteRegistry::default();
        let hits = titles(&reg.search("banner"));
        assert_eq!(hits, vec!["Banners", "Add Banner", "List Banners"]);
        assert_eq!(titles(&reg.search("  BANNER ")), hits);
    }

    #[test]
    fn search_matches_keywords_and_category() {
        let reg = RouteRegistry::default();
        let hits = titles(&reg.search("marketing"));
        assert_eq!(hits, vec!["Banners", "Add Banner", "List Banners"]);

        let hits = titles(&reg.search("best selling"));
        assert_eq!(hits, vec!["Analytics"]);

        assert!(reg.search("no-such-destination").is_empty());
    }

    #[test]
    fn sub_items_are_exact_and_case_sensitive() {
        let reg = RouteRegistry::default();
        assert_eq!(
            titles(&reg.sub_items("Products")),
            vec!["Add Product", "List Products", "Categories"]
        );
        assert!(reg.sub_items("products").is_empty());
        assert!(reg.sub_items("Dashboard").is_empty());
    }

    #[test]
    fn queries_are_stable_across_calls() {
        let reg = RouteRegistry::default();
        assert_eq!(reg.main_nav_items(), reg.main_nav_items());
        assert_eq!(reg.sub_items("Products"), reg.sub_items("Products"));
        for top in reg.main_nav_items() {
            assert!(reg.sub_items(top.title).iter().all(|r| r.parent.is_some()));
        }
    }

    #[test]
    fn every_parent_names_a_top_level_entry() {
        let tops: Vec<_> = ROUTES
            .iter()
            .filter(|r| r.parent.is_none())
            .map(|r| r.title)
            .collect();
        for r in ROUTES.iter().filter_map(|r| r.parent) {
            assert!(tops.contains(&r), "dangling parent `{r}`");
        }
    }

    #[test]
    fn paths_are_unique_and_resolvable() {
        let reg = RouteRegistry::default();
        for r in ROUTES {
            assert_eq!(reg.find_by_path(r.path).map(|d| d.title), Some(r.title));
        }
        assert!(reg.find_by_path("/nope").is_none());
    }
}
