//! Built-in catalog of known crawler user agents, grouped by category.
//!
//! Entries are kept exactly as listed, including near-duplicate identifiers
//! and the generic `bot`/`spider`/`crawler` tokens.

/// `(category, [(display name, agent identifier)])` in report order
pub(crate) static BUILTIN_CATALOG: &[(&str, &[(&str, &str)])] = &[
    (
        "Search Engines",
        &[
            ("Google", "Googlebot"),
            ("Google News", "Googlebot-News"),
            ("Google Images", "Googlebot-Image"),
            ("Google Video", "Googlebot-Video"),
            ("Google Other", "GoogleOther"),
            ("Google Shopping", "Storebot-Google"),
            ("Google Ads", "AdsBot-Google"),
            ("Google Ads Mobile", "AdsBot-Google-Mobile"),
            ("Google AdSense", "Mediapartners-Google"),
            ("Google Extended", "Google-Extended"),
            ("Google APIs", "APIs-Google"),
            ("Google API", "Google API"),
            ("Google Read Aloud", "Google-Read-Aloud"),
            ("Google Favicon", "Google Favicon"),
            ("Google Rich Snippets", "Google-AMPHTML"),
            ("Google Assistant", "Google-Assistant"),
            ("Google PageSpeed", "Google Page Speed"),
            ("Google Digital Asset Links", "Google Digital Asset Links"),
            ("Google Publisher Center", "Google Publisher Center"),
            ("Google Schema Markup Testing Tool", "Google Schema Markup Testing Tool"),
            ("Google AdWords Express", "Google-AdWords-Express"),
            ("Google AdWords Instant", "Google-Adwords-Instant"),
            ("Google Page Renderer", "Google-PageRenderer"),
            ("Bing", "BingBot"),
            ("Bing Preview", "BingPreview"),
            ("Bing Ads", "adidxbot"),
            ("MSN Bot", "msnbot"),
            ("Baidu", "Baiduspider"),
            ("Baidu Images", "Baiduspider-image"),
            ("Baidu News", "Baiduspider-news"),
            ("Yandex", "YandexBot"),
            ("Yandex Images", "YandexImages"),
            ("Yandex News", "YandexNews"),
            ("DuckDuckGo", "DuckDuckBot"),
            ("DuckDuckGo Assist", "DuckAssistBot"),
            ("Brave", "BraveBot"),
            ("Yahoo", "Slurp"),
            ("Yahoo Japan", "Y!J-ASC"),
            ("Ecosia", "ecosia"),
            ("Startpage", "Startpage"),
            ("Mojeek", "MojeekBot"),
            ("Qwant", "Qwantify"),
            ("Naver (South Korea)", "Yeti"),
            ("Seznam (Czech Republic)", "SeznamBot"),
            ("360 Search (China)", "360Spider"),
            ("Sogou (China)", "Sogou spider"),
            ("CocCoc (Vietnam)", "coccocbot"),
            ("PetalBot (Huawei)", "PetalBot"),
            ("Apple Search", "Applebot"),
            ("Alpha Bot", "AlphaBot"),
            ("Friendly Crawler", "FriendlyCrawler"),
            ("Seekr", "Seekr"),
            ("ZumBot", "ZumBot"),
        ],
    ),
    (
        "AI Crawlers",
        &[
            ("GPTBot (Training)", "GPTBot"),
            ("OAI-SearchBot (Search)", "OAI-SearchBot"),
            ("ChatGPT-User (Browsing)", "ChatGPT-User"),
            ("ChatGPT-User 2.0", "ChatGPT-User/2.0"),
            ("ClaudeBot", "ClaudeBot"),
            ("Claude Web", "Claude-Web"),
            ("Claude User", "Claude-User"),
            ("Claude SearchBot", "Claude-SearchBot"),
            ("Anthropic AI", "anthropic-ai"),
            ("PerplexityBot", "PerplexityBot"),
            ("Perplexity-User", "Perplexity-User"),
            ("Common Crawl", "CCBot"),
            ("Google AI", "Google-Extended"),
            ("Google Agent Mariner", "GoogleAgent-Mariner"),
            ("Google Cloud Vertex", "CloudVertexBot"),
            ("Meta AI", "Meta-ExternalAgent"),
            ("Meta Facebook", "facebookexternalhit"),
            ("Apple AI", "Applebot-Extended"),
            ("Amazon AI", "Amazonbot"),
            ("Amazon Nova Act", "Nova Act"),
            ("ByteDance AI (TikTok)", "Bytespider"),
            ("You.com", "YouBot"),
            ("Kagi Search", "KagiBot"),
            ("AddSearch", "AddSearchBot"),
            ("Cohere AI", "cohere-ai"),
            ("Cohere Training", "cohere-training-data-crawler"),
            ("Mistral AI User", "MistralAI-User"),
            ("DeepSeek", "DeepseekBot"),
            ("Grok AI", "GrokBot"),
            ("Hugging Face", "HuggingFaceBot"),
            ("Hugging Face Crawler", "huggingface"),
            ("Huawei PanGu", "PanguBot"),
            ("OpenAssistant", "OpenAssistantBot"),
            ("Image Dataset", "img2dataset"),
            ("Magpie Crawler", "magpie-crawler"),
            ("News Please", "news-please"),
            ("BigSur AI", "bigsur.ai"),
            ("Devin AI", "Devin"),
            ("Gemini Deep Research", "Gemini-Deep-Research"),
            ("Liner Bot", "LinerBot"),
            ("Qualified Bot", "QualifiedBot"),
            ("Allen Institute for Artificial Intelligence (Ai2)", "AI2Bot"),
            ("Japan Research", "ICC-Crawler"),
            ("Diffbot", "Diffbot"),
            ("Omgili", "omgili"),
            ("Omgili Bot", "omgilibot"),
            ("Webz.io Extended", "Webzio-Extended"),
            ("Timpi", "TimpiBot"),
        ],
    ),
    (
        "SEO & Analytics",
        &[
            ("Ahrefs", "AhrefsBot"),
            ("Ahrefs Site Audit", "Ahrefs Site Audit"),
            ("Semrush", "SemrushBot"),
            ("Semrush Site Audit", "SemrushBot-SA"),
            ("Majestic", "MJ12bot"),
            ("Moz", "rogerbot"),
            ("Moz Links", "dotbot"),
            ("Screaming Frog", "Screaming Frog SEO Spider"),
            ("SerpStat", "serpstatbot"),
            ("LinkResearchTools", "LRTBot"),
            ("SEMScoop", "SEMScoopBot"),
            ("DeepCrawl", "DeepCrawlBot"),
            ("OnCrawl", "OnCrawlBot"),
            ("Botify", "BotifyBot"),
            ("Ryte", "RyteBot"),
            ("Sistrix", "SistrixBot"),
            ("SearchMetrics", "SearchMetricsBot"),
            ("BrightEdge", "BrightEdgeBot"),
            ("seoClarity", "seoClarityBot"),
            ("DataForSEO", "DataForSEO"),
            ("Siteimprove Crawl", "Siteimprove Crawl"),
            ("prerender", "prerender"),
            ("Barkrowler", "Barkrowler"),
            ("ADmantX", "ADmantX"),
            ("Awario RSS", "AwarioRssBot"),
            ("Awario Smart", "AwarioSmartBot"),
            ("BLEX Bot", "BLEXBot"),
            ("Clarity Bot", "claritybot"),
            ("ImagesiftBot", "ImagesiftBot"),
            ("Meltwater", "Meltwater"),
            ("Pipl Bot", "PiplBot"),
            ("Senti Bot", "SentiBot"),
            ("FullStory", "FullStory"),
            ("Proximic", "Proximic"),
            ("Taboola", "Taboola"),
            ("klaviyo", "klaviyo"),
        ],
    ),
    (
        "Social Media",
        &[
            ("Facebook", "facebookexternalhit"),
            ("Facebook Bot", "FacebookBot"),
            ("Instagram", "facebookexternalhit"),
            ("WhatsApp", "WhatsApp"),
            ("Twitter / X", "Twitterbot"),
            ("LinkedIn", "LinkedInBot"),
            ("Pinterest", "Pinterestbot"),
            ("TikTok", "Bytespider"),
            ("Reddit", "RedditBot"),
            ("YouTube", "YouTubeBot"),
            ("Snapchat", "SnapchatBot"),
            ("Skype", "SkypeUriPreview"),
            ("Bluesky", "Bluesky"),
            ("Telegram", "TelegramBot"),
            ("Slack", "Slackbot"),
            ("Slack Image Proxy", "Slack-ImgProxy"),
            ("Slack Link Expanding", "Slackbot-LinkExpanding"),
            ("Slack Image Proxy CF", "Slack Image Proxy"),
            ("Discord", "Discordbot"),
            ("WeChat", "WeChatBot"),
            ("Line", "LineBot"),
            ("YahooMailProxy", "YahooMailProxy"),
            ("Xing", "XingBot"),
            ("Medium", "MediumBot"),
            ("Substack", "SubstackBot"),
            ("Tumblr", "TumblrBot"),
        ],
    ),
    (
        "Content Aggregators & News",
        &[
            ("Apple News", "AppleNewsBot"),
            ("Flipboard", "FlipboardProxy"),
            ("SmartNews", "SmartNewsBot"),
            ("NewsBreak", "NewsBreakBot"),
            ("Yahoo News", "YahooNewsBot"),
            ("BBC", "BBCBot"),
            ("Reuters", "ReutersBot"),
            ("Associated Press", "APBot"),
            ("Buzz Bot", "Buzzbot"),
            ("NewsNow", "NewsNow"),
            ("Panscient", "panscient.com"),
            ("Scoop.it", "scoop.it"),
        ],
    ),
    (
        "E-commerce & Shopping",
        &[
            ("Amazon", "Amazonbot"),
            ("eBay", "eBayBot"),
            ("Shopify", "ShopifyBot"),
            ("Shopify Captain Hook", "Shopify-Captain-Hook"),
            ("WooCommerce", "WooCommerceBot"),
            ("Magento", "MagentoBot"),
            ("Etsy", "EtsyBot"),
            ("Alibaba", "AlibabaBot"),
            ("AliExpress", "AliExpressBot"),
            ("Rakuten", "RakutenBot"),
            ("Zalando", "ZalandoBot"),
            ("PriceGrabber", "PriceGrabberBot"),
            ("Shopping.com", "ShoppingBot"),
            ("Kelkoo", "KelkooBot"),
            ("Nextag", "NextagBot"),
            ("Stripe", "Stripe"),
            ("PayPal", "PayPal"),
            ("Adyen", "Adyen"),
            ("ChargeBee", "ChargeBee"),
        ],
    ),
    (
        "Email & Marketing",
        &[
            ("MailChimp", "MailChimpBot"),
            ("Constant Contact", "ConstantContactBot"),
            ("SendGrid", "SendGridBot"),
            ("Campaign Monitor", "CampaignMonitorBot"),
            ("HubSpot", "HubSpotBot"),
            ("HubSpot Crawler", "HubSpot Crawler"),
            ("Marketo", "MarketoBot"),
            ("Pardot", "PardotBot"),
            ("ActiveCampaign", "ActiveCampaignBot"),
            ("ConvertKit", "ConvertKitBot"),
            ("AWeber", "AWeberBot"),
        ],
    ),
    (
        "Security & Monitoring",
        &[
            ("Cloudflare", "CloudflareBot"),
            ("Sucuri", "SucuriBot"),
            ("Wordfence", "WordfenceBot"),
            ("SiteLock", "SiteLockBot"),
            ("Qualys", "QualysBot"),
            ("Nessus", "NessusBot"),
            ("OpenVAS", "OpenVASBot"),
            ("Shodan", "ShodanBot"),
            ("Censys", "CensysBot"),
            ("ZoomEye", "ZoomEyeBot"),
            ("BinaryEdge", "BinaryEdgeBot"),
            ("Detectify", "Detectify"),
            ("OneTrust CMP Scanner", "Onetrust CMP Scanner"),
            ("Let's Encrypt", "Let's Encrypt"),
            ("ProjectShield URL Check", "ProjectShield Url Check"),
            ("Google Trust Services", "Google Trust Services (DCV Check)"),
        ],
    ),
    (
        "Site Monitoring & Analytics",
        &[
            ("Pingdom", "PingdomBot"),
            ("UptimeRobot", "UptimeRobotBot"),
            ("Site24x7", "Site24x7Bot"),
            ("StatusCake", "StatusCakeBot"),
            ("GTmetrix", "GTmetrixBot"),
            ("WebPageTest", "WebPageTestBot"),
            ("Lighthouse", "LighthouseBot"),
            ("Chrome Lighthouse", "Chrome-Lighthouse"),
            ("PageSpeed Insights", "PageSpeedBot"),
            ("Dareboost", "DareboostBot"),
            ("Google Site Verification", "Google-Site-Verification"),
            ("Google Association Service", "GoogleAssociationService"),
            ("Datadog Synthetics", "Datadog Synthetics"),
            ("Ghost Inspector", "Ghost Inspector"),
            ("Hotjar", "Hotjar"),
            ("New Relic", "NewRelicbot"),
            ("Uptime.com", "Uptime.com"),
            ("Catchpoint", "Catchpoint"),
            ("Better Uptime", "Better Uptime"),
            ("Grafana Synthetic Monitoring", "Grafana's Synthetic Monitoring"),
            ("Splunk Synthetics", "Splunk Synthetics"),
            ("Uptime LLC", "Uptime LLC"),
            ("Sentry Uptime Monitoring", "Sentry Uptime Monitoring"),
            ("LogicMonitor", "logicmonitor"),
            ("NodePing", "Nodeping"),
            ("Sentry", "Sentry"),
        ],
    ),
    (
        "Academic & Research",
        &[
            ("ResearchGate", "ResearchGateBot"),
            ("Academia.edu", "AcademiaBot"),
            ("JSTOR", "JSTORBot"),
            ("PubMed", "PubMedBot"),
            ("arXiv", "arXivBot"),
            ("Semantic Scholar", "SemanticScholarBot"),
            ("CORE", "COREBot"),
            ("CrossRef", "CrossRefBot"),
            ("ORCID", "ORCIDBot"),
            ("Turnitin Bot", "TurnitinBot"),
        ],
    ),
    (
        "Archive & Backup",
        &[
            ("Wayback Machine", "ia_archiver"),
            ("Internet Archive Bot", "archive.org_bot"),
            ("Internet Archive Extended", "ia_archiver-web.archive.org"),
            ("Wikipedia Bot", "IABot"),
            ("Archive.today", "archiveis_bot"),
            ("Portuguese Archive", "Arquivo-web-crawler"),
            ("French National Library", "bnf.fr_bot"),
            ("Turnitin Crawler", "Turnitin"),
            ("Heritrix", "heritrix"),
            ("HTTrack", "httrack"),
            ("Wget", "Wget"),
            ("cURL", "curl"),
            ("Nutch", "nutch"),
        ],
    ),
    (
        "Development & Testing",
        &[
            ("Postman", "PostmanRuntime"),
            ("Insomnia", "insomnia"),
            ("Selenium", "selenium"),
            ("Puppeteer", "HeadlessChrome"),
            ("Playwright", "Playwright"),
            ("PhantomJS", "PhantomJS"),
            ("SlimerJS", "SlimerJS"),
            ("Cypress", "Cypress"),
            ("WebDriver", "webdriver"),
            ("Scrapy", "Scrapy"),
            ("cron-job.org", "cron-job.org"),
            ("Zapier", "Zapier"),
            ("Retool", "Retool"),
            ("VaultPress", "VaultPress"),
            ("Make Platform", "Make Platform"),
        ],
    ),
    (
        "Feed Readers & Aggregators",
        &[
            ("Feedly", "FeedlyBot"),
            ("Feedbin", "Feedbin"),
            ("Inoreader", "InoreaderBot"),
            ("NewsBlur", "NewsBlurBot"),
            ("The Old Reader", "OldReaderBot"),
            ("Flipboard", "FlipboardBot"),
            ("Pocket", "PocketBot"),
            ("Overcast", "Overcast"),
            ("Instapaper", "InstapaperBot"),
            ("ReadWise", "ReadWiseBot"),
            ("IFTTT", "IFTTT"),
            ("Google Image Proxy", "GoogleImageProxy"),
            ("Microsoft Preview", "MicrosoftPreview"),
            ("HubSpot Feed Fetcher", "HubSpot Feed Fetcher"),
            ("HubSpot Page Fetcher", "HubSpot Page Fetcher"),
            ("Google Feed Fetcher", "Google Feed Fetcher"),
            ("RSS API", "RSS API"),
            ("Pocket Casts Feed Parser", "Pocket Casts Feed Parser"),
            ("Blogtrottr", "Blogtrottr"),
        ],
    ),
    (
        "Infrastructure & CDN",
        &[
            ("Cloudflare Prefetch", "Cloudflare Prefetch"),
            ("Cloudflare Traffic Manager", "Cloudflare-Traffic-Manager"),
            ("Cloudflare Healthchecks", "Cloudflare Healthchecks"),
            ("Cloudflare Stream Webhook", "Cloudflare Stream Webhook"),
            ("Cloudflare Custom Hostname Verification", "Cloudflare Custom Hostname Verification"),
            ("Cloudflare SSLDetector", "Cloudflare SSLDetector"),
        ],
    ),
    (
        "Miscellaneous & Validators",
        &[
            ("W3C Link Checker", "W3C_Validator"),
            ("W3C CSS Validator", "Jigsaw"),
            ("W3C Markup Validator", "W3C_Validator"),
            ("WordPress", "WordPress"),
            ("Drupal", "DrupalBot"),
            ("Joomla", "JoomlaBot"),
            ("Typepad", "TypePadBot"),
            ("Robozilla", "Robozilla"),
            ("AASA-Bot", "AASA-Bot"),
            ("PSBot", "psbot"),
            ("SiteAuditBot", "SiteAuditBot"),
            ("FeedBurner", "FeedBurner"),
            ("Hatena Antenna", "Hatena Antenna"),
            ("InfoNaviRobot", "InfoNaviRobot"),
            ("Harvest", "Harvest"),
            ("Generic Bot", "bot"),
            ("Spider", "spider"),
            ("Crawler", "crawler"),
        ],
    ),
];
