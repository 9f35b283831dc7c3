#[cfg(test)]
mod tests {
    use crate::parsers::html;

    #[test]
    fn test_document_order_is_preserved() {
        let html_content = r#"
            <html>
                <head><title>Shop</title></head>
                <body>
                    <nav><a href="/">Home</a><a href="/about">About</a></nav>
                    <main>
                        <img src="/hero.jpg" alt="Hero">
                        <a href="https://partner.com/?tag=x">Deal</a>
                        <img src="/footer.png">
                    </main>
                    <footer><a href="mailto:shop@example.com">Mail</a></footer>
                </body>
            </html>
        "#;

        let page = html::parse(html_content);

        let hrefs: Vec<_> = page
            .anchors
            .iter()
            .filter_map(|a| a.href.as_deref())
            .collect();
        assert_eq!(
            hrefs,
            vec!["/", "/about", "https://partner.com/?tag=x", "mailto:shop@example.com"]
        );

        let srcs: Vec<_> = page.images.iter().filter_map(|i| i.src.as_deref()).collect();
        assert_eq!(srcs, vec!["/hero.jpg", "/footer.png"]);
        assert_eq!(page.title.as_deref(), Some("Shop"));
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let page = html::parse("<a href='/x'>unclosed <img src=y.png alt=Y><p>text");
        assert_eq!(page.anchors.len(), 1);
        assert_eq!(page.anchors[0].href.as_deref(), Some("/x"));
        assert_eq!(page.images.len(), 1);
        assert_eq!(page.images[0].alt.as_deref(), Some("Y"));
    }

    #[test]
    fn test_empty_document() {
        let page = html::parse("");
        assert!(page.anchors.is_empty());
        assert!(page.images.is_empty());
        assert_eq!(page.title, None);
        assert_eq!(page.description, None);
    }
}
