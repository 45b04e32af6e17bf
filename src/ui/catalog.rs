//! Services the site offers, as shown in the contact form and detail modals.

/// Options of the contact form's "Service Required" select, in display order.
pub const SERVICE_OPTIONS: [&str; 5] = [
    "USA LLC Registration",
    "UK LTD Registration",
    "Payment Gateway Setup",
    "Business Banking",
    "EIN / ITIN Processing",
];

/// Preselected option of a fresh contact form.
pub const DEFAULT_SERVICE: &str = SERVICE_OPTIONS[0];

/// Whether `service` is one of the contact-form options. The server does not
/// enforce this; it is used for logging only.
pub fn is_offered(service: &str) -> bool {
    SERVICE_OPTIONS.contains(&service)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Registration,
    Payments,
    Banking,
}

/// Overview shown in a detail modal when an offering carries no text of its own.
pub const FALLBACK_OVERVIEW: &str = "We provide comprehensive support for this service, ensuring all legal and technical requirements are met for your business success.";

#[derive(Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    pub key: &'static str,
    pub category: ServiceCategory,
    pub name: &'static str,
    /// Card blurb. Empty for banks.
    pub description: &'static str,
    /// Detail-modal overview.
    pub detail: &'static str,
    pub features: &'static [&'static str],
    pub starting_price_usd: Option<u32>,
}

impl ServiceOffering {
    /// Text of the modal's "Overview" block: `detail`, else `description`,
    /// else [`FALLBACK_OVERVIEW`].
    pub fn overview(&self) -> &'static str {
        [self.detail, self.description]
            .into_iter()
            .find(|text| !text.is_empty())
            .unwrap_or(FALLBACK_OVERVIEW)
    }
}

pub static OFFERINGS: &[ServiceOffering] = &[
    ServiceOffering {
        key: "usa-llc",
        category: ServiceCategory::Registration,
        name: "USA Non-Resident LLC",
        description: "Complete formation in any US state (Delaware, Wyoming, etc.) for non-residents.",
        detail: "Our USA LLC formation service is designed specifically for non-residents looking to tap into the US market. We handle everything from the initial Articles of Organization to obtaining your EIN and setting up a registered agent. This service ensures you are fully compliant with both state and federal regulations, allowing you to operate your business with peace of mind.",
        features: &[
            "Articles of Organization",
            "Operating Agreement",
            "Registered Agent Service",
            "Compliance Support",
        ],
        starting_price_usd: Some(399),
    },
    ServiceOffering {
        key: "ein-itin",
        category: ServiceCategory::Registration,
        name: "EIN & ITIN Processing",
        description: "Fast-track Employer Identification Number and Individual Taxpayer ID Number acquisition.",
        detail: "Navigating the IRS can be daunting. We simplify the process of obtaining your EIN (Employer Identification Number) and ITIN (Individual Taxpayer Identification Number). Whether you need an EIN for your new LLC or an ITIN for personal tax purposes, our team ensures your applications are prepared correctly and processed as quickly as possible.",
        features: &[
            "SS-4 Form Preparation",
            "IRS Communication",
            "Certified Acceptance Agent Support",
        ],
        starting_price_usd: Some(199),
    },
    ServiceOffering {
        key: "uk-ltd",
        category: ServiceCategory::Registration,
        name: "UK Non-Resident LTD",
        description: "Establish your UK presence with a Limited company registration from anywhere.",
        detail: "The UK offers a robust environment for international business. Our UK LTD formation service covers registration with Companies House, providing a registered office address, and ensuring all statutory requirements are met. We help you establish a professional UK presence, complete with a Certificate of Incorporation and all necessary company documents.",
        features: &[
            "Companies House Filing",
            "Registered Office Address",
            "Certificate of Incorporation",
        ],
        starting_price_usd: Some(499),
    },
    ServiceOffering {
        key: "paypal",
        category: ServiceCategory::Payments,
        name: "PayPal Business",
        description: "Verified business account setup for global transactions.",
        detail: "PayPal is a global leader in online payments. We assist you in setting up and verifying a professional PayPal Business account, ensuring you can accept payments from customers worldwide securely and efficiently.",
        features: &[],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "wise",
        category: ServiceCategory::Payments,
        name: "Wise Business",
        description: "Multi-currency accounts with real exchange rates.",
        detail: "Wise (formerly TransferWise) offers the best rates for international transfers. We help you set up a Wise Business account, allowing you to hold and exchange multiple currencies at the real mid-market rate, saving you money on every transaction.",
        features: &[],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "revolut",
        category: ServiceCategory::Payments,
        name: "Revolut Business",
        description: "Modern business banking and expense management.",
        detail: "Revolut Business provides a powerful platform for managing your company's finances. From multi-currency accounts to corporate cards and expense management tools, we help you leverage Revolut's modern banking features to grow your business.",
        features: &[],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "mercury",
        category: ServiceCategory::Payments,
        name: "Mercury Business",
        description: "Banking built specifically for startups and tech companies.",
        detail: "Mercury is the go-to banking solution for tech startups. We facilitate your application for a Mercury account, giving you access to a suite of tools designed to help your startup scale, including API access and seamless integrations.",
        features: &[],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "worldfirst",
        category: ServiceCategory::Payments,
        name: "WorldFirst Business",
        description: "Specialized international payment solutions for e-commerce.",
        detail: "WorldFirst specializes in helping e-commerce businesses manage international payments. We help you set up local currency accounts in major markets, making it easier and cheaper to receive funds from global marketplaces like Amazon and eBay.",
        features: &[],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "bank-of-america",
        category: ServiceCategory::Banking,
        name: "Bank of America",
        description: "",
        detail: "As one of the largest banks in the US, Bank of America offers unparalleled global recognition and a suite of advanced online banking tools. We help you navigate their application process to secure a business account that grows with you.",
        features: &[
            "Global Recognition",
            "Advanced Online Banking",
            "Business Credit Lines",
        ],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "usa-bank",
        category: ServiceCategory::Banking,
        name: "USA Bank",
        description: "",
        detail: "USA Bank provides personalized service and competitive rates, making it an excellent choice for businesses looking for a reliable domestic banking partner. We assist in preparing all necessary documentation for a smooth account opening.",
        features: &[
            "Personalized Service",
            "Competitive Rates",
            "Nationwide Access",
        ],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "us-century-bank",
        category: ServiceCategory::Banking,
        name: "U.S. Century Bank",
        description: "",
        detail: "U.S. Century Bank focuses on specialized business solutions with local expertise. They offer tailored banking products that cater to the unique needs of your business, and we help you build that relationship.",
        features: &[
            "Specialized Business Focus",
            "Local Expertise",
            "Tailored Solutions",
        ],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "barclays",
        category: ServiceCategory::Banking,
        name: "Barclays",
        description: "",
        detail: "Barclays is a UK banking giant with extensive experience in international trade. We facilitate your application for a Barclays business account, giving you access to their corporate banking solutions and global network.",
        features: &[
            "UK Banking Giant",
            "International Trade Support",
            "Corporate Banking Solutions",
        ],
        starting_price_usd: None,
    },
    ServiceOffering {
        key: "lloyds",
        category: ServiceCategory::Banking,
        name: "Lloyds Bank",
        description: "",
        detail: "Lloyds Bank is a leading UK retail bank that offers dedicated relationship managers and business growth loans. We help you establish a banking presence with Lloyds to support your UK business operations.",
        features: &[
            "Leading UK Retail Bank",
            "Business Growth Loans",
            "Dedicated Relationship Managers",
        ],
        starting_price_usd: None,
    },
];

pub fn offering(key: &str) -> Option<&'static ServiceOffering> {
    OFFERINGS.iter().find(|o| o.key == key)
}

pub fn by_category(category: ServiceCategory) -> impl Iterator<Item = &'static ServiceOffering> {
    OFFERINGS.iter().filter(move |o| o.category == category)
}
