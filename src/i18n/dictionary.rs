//! The site dictionary.
//!
//! Every entry names a `Key` variant, its dotted string form, and the text
//! for each supported language. Leaving a language out of an entry is a
//! compile error, so the key sets of all languages are identical by
//! construction.

use crate::i18n::Language;

macro_rules! dictionary {
    ($(
        $variant:ident => $key:literal {
            en: $en:literal,
            ar: $ar:literal $(,)?
        }
    )*) => {
        /// A content key: a stable identifier the view layer asks for text by.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            /// Every key, in dictionary order.
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// Dotted string form (e.g., "nav.home").
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => $key,)*
                }
            }

            /// Display text for this key in `language`.
            pub const fn text(self, language: Language) -> &'static str {
                match self {
                    $(Key::$variant => match language {
                        Language::English => $en,
                        Language::Arabic => $ar,
                    },)*
                }
            }
        }
    };
}

dictionary! {
    NavHome => "nav.home" {
        en: "Home",
        ar: "الرئيسية",
    }
    NavServices => "nav.services" {
        en: "Services",
        ar: "الخدمات",
    }
    NavAbout => "nav.about" {
        en: "About",
        ar: "من نحن",
    }
    NavFaq => "nav.faq" {
        en: "FAQ",
        ar: "الأسئلة الشائعة",
    }
    NavContact => "nav.contact" {
        en: "Contact Us",
        ar: "تواصل معنا",
    }
    NavLanguage => "nav.language" {
        en: "العربية",
        ar: "English",
    }

    HeroSlide1Title => "hero.slide1.title" {
        en: "Delivering Excellence in Oil Services & Energy Solutions.",
        ar: "نقدم التميز في خدمات النفط وحلول الطاقة",
    }
    HeroSlide1Subtitle => "hero.slide1.subtitle" {
        en: "Integrated storage, logistics, and consulting for the oil & gas sector.",
        ar: "تخزين متكامل، لوجستيات، واستشارات لقطاع النفط والغاز",
    }
    HeroSlide1Cta => "hero.slide1.cta" {
        en: "Get Started",
        ar: "ابدأ الآن",
    }
    HeroSlide2Title => "hero.slide2.title" {
        en: "Why Petra?",
        ar: "لماذا بترا؟",
    }
    HeroSlide2Subtitle => "hero.slide2.subtitle" {
        en: "Because we combine deep expertise with operational integrity and precision.",
        ar: "لأننا نجمع بين الخبرة العميقة والنزاهة التشغيلية والدقة",
    }
    HeroSlide2Cta => "hero.slide2.cta" {
        en: "Discover Why",
        ar: "اكتشف السبب",
    }
    HeroSlide3Title => "hero.slide3.title" {
        en: "Quality & Safety in Every Operation",
        ar: "الجودة والسلامة في كل عملية",
    }
    HeroSlide3Subtitle => "hero.slide3.subtitle" {
        en: "We follow strict international standards to ensure reliability and risk-free performance.",
        ar: "نتبع معايير دولية صارمة لضمان الموثوقية والأداء الخالي من المخاطر",
    }
    HeroSlide3Cta => "hero.slide3.cta" {
        en: "See Our Standards",
        ar: "شاهد معاييرنا",
    }
    HeroSlide4Title => "hero.slide4.title" {
        en: "Our Reach, Your Advantage",
        ar: "انتشارنا، ميزتك",
    }
    HeroSlide4Subtitle => "hero.slide4.subtitle" {
        en: "Comprehensive logistics and sustainable initiatives across the energy sector.",
        ar: "لوجستيات شاملة ومبادرات مستدامة عبر قطاع الطاقة",
    }
    HeroSlide4Cta => "hero.slide4.cta" {
        en: "Explore Services",
        ar: "استكشف الخدمات",
    }

    QuicklinksFaqTitle => "quicklinks.faq.title" {
        en: "FAQs",
        ar: "الأسئلة الشائعة",
    }
    QuicklinksFaqDesc => "quicklinks.faq.desc" {
        en: "Learn more about our services, procedures, and safety standards through the most frequently asked questions.",
        ar: "تعرف على المزيد حول خدماتنا وإجراءاتنا ومعايير السلامة.",
    }
    QuicklinksFaqCta => "quicklinks.faq.cta" {
        en: "View FAQs",
        ar: "عرض الأسئلة",
    }
    QuicklinksContactTitle => "quicklinks.contact.title" {
        en: "Contact Us",
        ar: "تواصل معنا",
    }
    QuicklinksContactDesc => "quicklinks.contact.desc" {
        en: "Our team is ready to assist you. Reach out for inquiries, partnerships, or service requests.",
        ar: "فريقنا جاهز لمساعدتك. تواصل معنا للاستفسارات أو الشراكات.",
    }
    QuicklinksContactCta => "quicklinks.contact.cta" {
        en: "Get in Touch",
        ar: "تواصل الآن",
    }
    QuicklinksSafetyTitle => "quicklinks.safety.title" {
        en: "Safety & Compliance",
        ar: "السلامة والامتثال",
    }
    QuicklinksSafetyDesc => "quicklinks.safety.desc" {
        en: "We apply rigorous safety measures to ensure the protection of people, assets, and the environment.",
        ar: "نطبق إجراءات سلامة صارمة لضمان حماية الأشخاص والأصول والبيئة.",
    }
    QuicklinksSafetyCta => "quicklinks.safety.cta" {
        en: "Safety Commitment",
        ar: "التزامنا بالسلامة",
    }

    ServicesTitle => "services.title" {
        en: "Innovative Services That Power the Future of Energy",
        ar: "خدمات مبتكرة تدعم مستقبل الطاقة",
    }
    ServicesSubtitle => "services.subtitle" {
        en: "Comprehensive solutions for the modern energy sector",
        ar: "حلول شاملة لقطاع الطاقة الحديث",
    }
    ServicesCtaTitle => "services.cta.title" {
        en: "Ready to enhance your energy operations?",
        ar: "هل أنت مستعد لتحسين عمليات الطاقة؟",
    }
    ServicesCtaButton => "services.cta.button" {
        en: "Contact Our Team",
        ar: "اتصل بفريقنا",
    }

    DetailedStorageTitle => "detailed.storage.title" {
        en: "Petroleum Derivatives Storage",
        ar: "تخزين المشتقات البترولية",
    }
    DetailedStorageDesc => "detailed.storage.desc" {
        en: "We provide highly secure and efficient storage solutions for gasoline, diesel, oil, and other petroleum derivatives. Our operations include management and maintenance of storage tanks in accordance with international safety and quality standards. Inventory monitoring systems reduce product loss and improve operational control.",
        ar: "نوفر حلول تخزين آمنة وفعالة للبنزين والديزل والزيوت والمشتقات البترولية الأخرى. تشمل عملياتنا إدارة وصيانة خزانات التخزين وفقاً للمعايير الدولية.",
    }
    DetailedStorageCta => "detailed.storage.cta" {
        en: "Professional storage infrastructure built for safety and sustainability",
        ar: "بنية تخزين احترافية تضمن السلامة والاستدامة",
    }
    DetailedLogisticsTitle => "detailed.logistics.title" {
        en: "Supply Chain Management",
        ar: "إدارة سلسلة التوريد",
    }
    DetailedLogisticsDesc => "detailed.logistics.desc" {
        en: "We plan and execute integrated logistics solutions for transporting and distributing petroleum derivatives. Designed to optimize distribution networks, reduce operational costs, and ensure timely delivery. We maintain strong relationships with suppliers and clients to secure supply continuity.",
        ar: "نخطط وننفذ حلول لوجستية متكاملة لنقل وتوزيع المشتقات البترولية. مصممة لتحسين شبكات التوزيع وتقليل التكاليف التشغيلية.",
    }
    DetailedLogisticsCta => "detailed.logistics.cta" {
        en: "Smart logistics management that enhances distribution flow",
        ar: "إدارة لوجستية ذكية تعزز انسيابية التوزيع",
    }
    DetailedStationTitle => "detailed.station.title" {
        en: "Fuel Station Investment & Operations",
        ar: "الاستثمار وتشغيل محطات الوقود",
    }
    DetailedStationDesc => "detailed.station.desc" {
        en: "Feasibility studies for establishing and upgrading fuel stations in strategic locations. Full operation and management services focused on long-term profitability. Support for sustainable initiatives including solar-powered energy solutions.",
        ar: "دراسات جدوى لإنشاء وتطوير محطات الوقود في مواقع استراتيجية. خدمات تشغيل وإدارة كاملة تركز على الربحية طويلة المدى.",
    }
    DetailedStationCta => "detailed.station.cta" {
        en: "Integrated fuel station management for sustainable growth",
        ar: "إدارة متكاملة لمحطات الوقود بنمو مستدام",
    }
    DetailedConsultingTitle => "detailed.consulting.title" {
        en: "Technical & Engineering Consultancy",
        ar: "الاستشارات الفنية والهندسية",
    }
    DetailedConsultingDesc => "detailed.consulting.desc" {
        en: "Expert consulting solutions for oil & gas infrastructure development. Market analysis and identification of new investment opportunities in the petroleum sector. Training programs that develop qualified teams capable of managing critical petroleum facilities.",
        ar: "حلول استشارية متخصصة لتطوير البنية التحتية للنفط والغاز. تحليل السوق وتحديد فرص الاستثمار الجديدة.",
    }
    DetailedConsultingCta => "detailed.consulting.cta" {
        en: "Engineering expertise supporting informed investment decisions",
        ar: "خبرات هندسية تدعم قرارات استثمارية دقيقة",
    }

    ServiceDropdownStorage => "service.dropdown.storage" {
        en: "Petroleum Products Storage",
        ar: "تخزين المنتجات البترولية",
    }
    ServiceDropdownLogistics => "service.dropdown.logistics" {
        en: "Supply Chain Management",
        ar: "إدارة سلسلة التوريد",
    }
    ServiceDropdownStation => "service.dropdown.station" {
        en: "Fuel Station Investment",
        ar: "الاستثمار في محطات الوقود",
    }
    ServiceDropdownConsulting => "service.dropdown.consulting" {
        en: "Technical & Engineering Consulting",
        ar: "الاستشارات الفنية والهندسية",
    }

    AboutTitle => "about.title" {
        en: "Who We Are",
        ar: "من نحن",
    }
    AboutDescription => "about.description" {
        en: "Petra is a specialized company in the management, storage, and logistics of petroleum derivatives. We work with industry-leading standards to ensure safe, reliable, and efficient energy solutions that support national growth and business continuity.",
        ar: "بترا شركة متخصصة في إدارة وتخزين ولوجستيات المشتقات البترولية. نعمل وفق معايير رائدة في الصناعة لضمان حلول طاقة آمنة وموثوقة.",
    }
    AboutVisionTitle => "about.vision.title" {
        en: "Our Vision",
        ar: "رؤيتنا",
    }
    AboutVisionText => "about.vision.text" {
        en: "To be a trusted leader in petroleum logistics and storage services.",
        ar: "أن نكون الشريك الموثوق والرائد في خدمات لوجستيات وتخزين البترول.",
    }
    AboutMissionTitle => "about.mission.title" {
        en: "Our Mission",
        ar: "مهمتنا",
    }
    AboutMissionText => "about.mission.text" {
        en: "To deliver energy with excellence through innovation, safety, and operational efficiency.",
        ar: "تقديم الطاقة بامتياز من خلال الابتكار والسلامة والكفاءة التشغيلية.",
    }
    AboutValuesTitle => "about.values.title" {
        en: "Our Core Values",
        ar: "قيمنا الأساسية",
    }
    AboutValuesSafety => "about.values.safety" {
        en: "Safety",
        ar: "السلامة",
    }
    AboutValuesReliability => "about.values.reliability" {
        en: "Reliability",
        ar: "الموثوقية",
    }
    AboutValuesIntegrity => "about.values.integrity" {
        en: "Integrity",
        ar: "النزاهة",
    }
    AboutValuesSustainability => "about.values.sustainability" {
        en: "Sustainability",
        ar: "الاستدامة",
    }
    AboutValuesExcellence => "about.values.excellence" {
        en: "Excellence",
        ar: "التميز",
    }

    SafetyTitle => "safety.title" {
        en: "Safety First. Quality Always.",
        ar: "السلامة أولاً. الجودة دائماً.",
    }
    SafetyDescription => "safety.description" {
        en: "We apply strict HSE (Health, Safety, and Environment) standards across every stage of our operations. Our safety protocols protect employees, assets, and the environment — while maintaining compliance with global regulations and industry certifications.",
        ar: "نطبق معايير صارمة للصحة والسلامة والبيئة في كل مرحلة من عملياتنا.",
    }
    SafetyHse => "safety.hse" {
        en: "Health, Safety & Environment",
        ar: "الصحة والسلامة والبيئة",
    }
    SafetyHighlight1 => "safety.highlight1" {
        en: "Preventive maintenance and risk control",
        ar: "الصيانة الوقائية والتحكم في المخاطر",
    }
    SafetyHighlight2 => "safety.highlight2" {
        en: "Emergency response readiness",
        ar: "الاستعداد للاستجابة للطوارئ",
    }
    SafetyHighlight3 => "safety.highlight3" {
        en: "Environmental protection practices",
        ar: "ممارسات حماية البيئة",
    }

    ProjectsTitle => "projects.title" {
        en: "Our Track Record",
        ar: "سجلنا الحافل",
    }
    ProjectsDescription => "projects.description" {
        en: "We take pride in delivering successful logistics and storage solutions for various strategic clients in the oil & gas sector. Petra continues to grow with new development and investment projects across the region.",
        ar: "نفخر بتقديم حلول لوجستية وتخزين ناجحة لمختلف العملاء الاستراتيجيين في قطاع النفط والغاز.",
    }
    ProjectsStatsYears => "projects.stats.years" {
        en: "Years of Experience",
        ar: "سنوات من الخبرة",
    }
    ProjectsStatsClients => "projects.stats.clients" {
        en: "Satisfied Clients",
        ar: "عملاء راضون",
    }
    ProjectsStatsLocations => "projects.stats.locations" {
        en: "Service Locations",
        ar: "مواقع الخدمة",
    }
    ProjectsStatsCertifications => "projects.stats.certifications" {
        en: "Certifications",
        ar: "الشهادات",
    }
    ProjectsProject1Tag => "projects.project1.tag" {
        en: "Storage",
        ar: "تخزين",
    }
    ProjectsProject1Title => "projects.project1.title" {
        en: "Regional Storage Facility",
        ar: "منشأة تخزين إقليمية",
    }
    ProjectsProject1Desc => "projects.project1.desc" {
        en: "State-of-the-art petroleum storage facility with 50,000+ barrel capacity.",
        ar: "منشأة تخزين بترول حديثة بسعة تزيد عن 50,000 برميل.",
    }
    ProjectsProject2Tag => "projects.project2.tag" {
        en: "Logistics",
        ar: "لوجستيات",
    }
    ProjectsProject2Title => "projects.project2.title" {
        en: "Fleet Optimization Project",
        ar: "مشروع تحسين الأسطول",
    }
    ProjectsProject2Desc => "projects.project2.desc" {
        en: "Comprehensive logistics overhaul reducing delivery times by 40%.",
        ar: "إصلاح لوجستي شامل قلل أوقات التسليم بنسبة 40%.",
    }
    ProjectsProject3Tag => "projects.project3.tag" {
        en: "Investment",
        ar: "استثمار",
    }
    ProjectsProject3Title => "projects.project3.title" {
        en: "Green Fuel Stations",
        ar: "محطات وقود خضراء",
    }
    ProjectsProject3Desc => "projects.project3.desc" {
        en: "Solar-powered fuel station network across strategic locations.",
        ar: "شبكة محطات وقود تعمل بالطاقة الشمسية.",
    }

    ContactTitle => "contact.title" {
        en: "Get In Touch",
        ar: "تواصل معنا",
    }
    ContactDescription => "contact.description" {
        en: "Our team is ready to support your needs. Connect with us for business inquiries, service proposals, or partnership opportunities.",
        ar: "فريقنا جاهز لدعم احتياجاتكم. تواصلوا معنا للاستفسارات التجارية أو عروض الخدمات أو فرص الشراكة.",
    }
    ContactFormName => "contact.form.name" {
        en: "Full Name",
        ar: "الاسم الكامل",
    }
    ContactFormEmail => "contact.form.email" {
        en: "Email Address",
        ar: "البريد الإلكتروني",
    }
    ContactFormPhone => "contact.form.phone" {
        en: "Phone Number",
        ar: "رقم الهاتف",
    }
    ContactFormMessage => "contact.form.message" {
        en: "Your Message",
        ar: "رسالتك",
    }
    ContactFormSubmit => "contact.form.submit" {
        en: "Send Message",
        ar: "إرسال الرسالة",
    }
    ContactFormSuccess => "contact.form.success" {
        en: "Message Sent!",
        ar: "تم إرسال الرسالة!",
    }
    ContactFormSuccessDesc => "contact.form.successDesc" {
        en: "We will get back to you shortly.",
        ar: "سنتواصل معك قريبًا.",
    }
    ContactInfoHours => "contact.info.hours" {
        en: "Working Hours",
        ar: "ساعات العمل",
    }
    ContactMapPlaceholder => "contact.map.placeholder" {
        en: "Location Map",
        ar: "خريطة الموقع",
    }

    CtaTitle => "cta.title" {
        en: "Partner with Us to Power the Future",
        ar: "شاركنا لتشكيل مستقبل الطاقة",
    }
    CtaDescription => "cta.description" {
        en: "Ready to take your energy operations to the next level? Let us help you achieve excellence in petroleum storage, logistics, and consulting.",
        ar: "هل أنت مستعد للارتقاء بعملياتك في مجال الطاقة؟",
    }
    CtaButton1 => "cta.button1" {
        en: "Request a Quote",
        ar: "اطلب عرض سعر",
    }
    CtaButton2 => "cta.button2" {
        en: "Learn More",
        ar: "اعرف المزيد",
    }

    FaqTitle => "faq.title" {
        en: "Frequently Asked Questions",
        ar: "الأسئلة الشائعة",
    }
    FaqSubtitle => "faq.subtitle" {
        en: "Find answers to common questions about our services and operations.",
        ar: "اعثر على إجابات للأسئلة الشائعة حول خدماتنا.",
    }
    FaqQ1 => "faq.q1" {
        en: "What services does Petra offer?",
        ar: "ما هي الخدمات التي تقدمها بترا؟",
    }
    FaqA1 => "faq.a1" {
        en: "Petra offers comprehensive petroleum services including storage solutions, supply chain management, fuel station investment & operations, and technical & engineering consultancy.",
        ar: "تقدم بترا خدمات بترولية شاملة تشمل حلول التخزين وإدارة سلسلة التوريد والاستثمار وتشغيل محطات الوقود.",
    }
    FaqQ2 => "faq.q2" {
        en: "What safety standards do you follow?",
        ar: "ما هي معايير السلامة التي تتبعونها؟",
    }
    FaqA2 => "faq.a2" {
        en: "We adhere to strict international HSE standards, ensuring all operations comply with global regulations and industry best practices.",
        ar: "نلتزم بمعايير صارمة للصحة والسلامة والبيئة الدولية.",
    }
    FaqQ3 => "faq.q3" {
        en: "Where are your services available?",
        ar: "أين تتوفر خدماتكم؟",
    }
    FaqA3 => "faq.a3" {
        en: "Our services are available across Jordan and the broader Middle East region.",
        ar: "خدماتنا متاحة في جميع أنحاء الأردن ومنطقة الشرق الأوسط.",
    }
    FaqQ4 => "faq.q4" {
        en: "How can I request a quote?",
        ar: "كيف يمكنني طلب عرض سعر؟",
    }
    FaqA4 => "faq.a4" {
        en: "You can request a quote by filling out our contact form, calling our office directly, or sending us an email.",
        ar: "يمكنك طلب عرض سعر من خلال ملء نموذج الاتصال أو الاتصال بمكتبنا مباشرة.",
    }
    FaqQ5 => "faq.q5" {
        en: "Do you offer partnership opportunities?",
        ar: "هل تقدمون فرص شراكة؟",
    }
    FaqA5 => "faq.a5" {
        en: "Yes, we actively seek strategic partnerships with companies in the oil & gas sector.",
        ar: "نعم، نسعى بنشاط للشراكات الاستراتيجية مع الشركات في قطاع النفط والغاز.",
    }
    FaqQ6 => "faq.q6" {
        en: "What makes Petra different from competitors?",
        ar: "ما الذي يميز بترا عن المنافسين؟",
    }
    FaqA6 => "faq.a6" {
        en: "Petra combines deep industry expertise with operational integrity, innovative solutions, and a commitment to safety and sustainability.",
        ar: "تجمع بترا بين الخبرة العميقة في الصناعة والنزاهة التشغيلية والحلول المبتكرة.",
    }

    FooterDescription => "footer.description" {
        en: "Specialized in petroleum derivatives management, storage, and logistics.",
        ar: "متخصصون في إدارة وتخزين ولوجستيات المشتقات البترولية.",
    }
    FooterQuickLinks => "footer.quickLinks" {
        en: "Quick Links",
        ar: "روابط سريعة",
    }
    FooterServices => "footer.services" {
        en: "Our Services",
        ar: "خدماتنا",
    }
    FooterContact => "footer.contact" {
        en: "Contact Info",
        ar: "معلومات الاتصال",
    }
    FooterLinksHome => "footer.links.home" {
        en: "Home",
        ar: "الرئيسية",
    }
    FooterLinksServices => "footer.links.services" {
        en: "Services",
        ar: "الخدمات",
    }
    FooterLinksAbout => "footer.links.about" {
        en: "About Us",
        ar: "من نحن",
    }
    FooterLinksContact => "footer.links.contact" {
        en: "Contact",
        ar: "اتصل بنا",
    }
    FooterRights => "footer.rights" {
        en: "All rights reserved.",
        ar: "جميع الحقوق محفوظة.",
    }

    AboutHeroTitle => "about.hero.title" {
        en: "Petra — Strength… Resilience… Stability in the Energy World",
        ar: "بيترا — القوة… الصلابة… الثبات في عالم الطاقة",
    }
    AboutHeroSubtitle => "about.hero.subtitle" {
        en: "A leading company in petroleum derivatives storage, transportation, and consulting services.",
        ar: "شركة رائدة في حلول تخزين ونقل المشتقات النفطية والخدمات الاستشارية.",
    }
    AboutHeroCta1 => "about.hero.cta1" {
        en: "Contact Us",
        ar: "تواصل معنا",
    }
    AboutHeroCta2 => "about.hero.cta2" {
        en: "Our Services",
        ar: "خدماتنا",
    }
    AboutSectionLabel => "about.section.label" {
        en: "About Us",
        ar: "من نحن",
    }
    AboutSectionTitle => "about.section.title" {
        en: "Who We Are",
        ar: "تعرف علينا",
    }
    AboutSectionParagraph1 => "about.section.paragraph1" {
        en: "The word Petra means \"rock\" in ancient Greek, symbolizing strength, resilience, patience, and stability. Petra Oil Services is a leading company in the oil and energy sector, offering extensive expertise in providing integrated solutions for storage, transportation, and consulting.",
        ar: "كلمة بيترا تعني \"الصخرة\" في اليونانية القديمة، ترمز إلى القوة والصلابة والصبر والثبات. شركة بيترا لخدمات النفط هي شركة رائدة في قطاع النفط والطاقة، تقدم خبرة واسعة في توفير حلول متكاملة للتخزين والنقل والاستشارات.",
    }
    AboutSectionParagraph2 => "about.section.paragraph2" {
        en: "The company's scope includes oil & gas consulting, petroleum product storage and transport (land & sea), fuel station investment and rehabilitation, supply and installation of fuel systems, and various services related to the oil and gas industry.",
        ar: "يشمل نطاق عمل الشركة استشارات النفط والغاز، تخزين ونقل المنتجات البترولية (براً وبحراً)، الاستثمار وإعادة تأهيل محطات الوقود، توريد وتركيب أنظمة الوقود، والخدمات المتنوعة المتعلقة بصناعة النفط والغاز.",
    }

    TimelineLabel => "timeline.label" {
        en: "Our Journey",
        ar: "مسيرتنا",
    }
    TimelineTitle => "timeline.title" {
        en: "Company Timeline",
        ar: "الجدول الزمني للشركة",
    }
    Timeline2019 => "timeline.2019" {
        en: "Company established in the local market. Strategic planning and infrastructure development. Obtaining required licenses and forming a specialized team.",
        ar: "تأسيس الشركة في السوق المحلي. التخطيط الاستراتيجي وتطوير البنية التحتية. الحصول على التراخيص المطلوبة وتشكيل فريق متخصص.",
    }
    Timeline2020 => "timeline.2020" {
        en: "Strategic expansion and doubling storage capacity. Operational efficiency improvements and workforce training.",
        ar: "التوسع الاستراتيجي ومضاعفة سعة التخزين. تحسينات الكفاءة التشغيلية وتدريب القوى العاملة.",
    }
    Timeline2022 => "timeline.2022" {
        en: "Implementation of advanced monitoring technologies. Adoption of FMS (Fuel Management System). Achieving high safety records and operational excellence.",
        ar: "تطبيق تقنيات المراقبة المتقدمة. اعتماد نظام إدارة الوقود (FMS). تحقيق سجلات سلامة عالية والتميز التشغيلي.",
    }
    Timeline2024 => "timeline.2024" {
        en: "Strengthening the company's position as a fuel-solutions leader. Expansion into oil consulting services. Building strong market reputation as a trusted partner.",
        ar: "تعزيز مكانة الشركة كرائدة في حلول الوقود. التوسع في خدمات الاستشارات النفطية. بناء سمعة سوقية قوية كشريك موثوق.",
    }
    Timeline2025 => "timeline.2025" {
        en: "Received international quality certifications: ISO 9001 and ISO 29001.",
        ar: "الحصول على شهادات الجودة الدولية: ISO 9001 و ISO 29001.",
    }

    VisionTitle => "vision.title" {
        en: "Our Vision",
        ar: "رؤيتنا",
    }
    VisionText => "vision.text" {
        en: "To become the leading provider of petroleum derivative services by delivering high-quality solutions that support energy sustainability and exceed client expectations.",
        ar: "أن نصبح المزود الرائد لخدمات المشتقات البترولية من خلال تقديم حلول عالية الجودة تدعم استدامة الطاقة وتتجاوز توقعات العملاء.",
    }

    MissionTitle => "mission.title" {
        en: "Our Mission",
        ar: "مهمتنا",
    }
    MissionText => "mission.text" {
        en: "To provide safe and efficient storage and service solutions for petroleum products while maintaining the highest standards of quality, safety, and environmental sustainability.",
        ar: "توفير حلول تخزين وخدمات آمنة وفعالة للمنتجات البترولية مع الحفاظ على أعلى معايير الجودة والسلامة والاستدامة البيئية.",
    }

    ScopeLabel => "scope.label" {
        en: "What We Do",
        ar: "ماذا نفعل",
    }
    ScopeTitle => "scope.title" {
        en: "Scope of Work",
        ar: "نطاق العمل",
    }
    ScopeStorageTitle => "scope.storage.title" {
        en: "Petroleum Storage",
        ar: "تخزين البترول",
    }
    ScopeStorageDesc => "scope.storage.desc" {
        en: "Safe and efficient storage solutions for gasoline, diesel, oil, and other products. Operation and management of storage tanks according to global standards. Inventory monitoring and loss-reduction technologies.",
        ar: "حلول تخزين آمنة وفعالة للبنزين والديزل والزيوت والمنتجات الأخرى. تشغيل وإدارة خزانات التخزين وفقاً للمعايير العالمية. تقنيات مراقبة المخزون وتقليل الفاقد.",
    }
    ScopeLogisticsTitle => "scope.logistics.title" {
        en: "Supply Chain Management",
        ar: "إدارة سلسلة التوريد",
    }
    ScopeLogisticsDesc => "scope.logistics.desc" {
        en: "Planning and executing integrated logistics for petroleum product distribution. Optimizing distribution networks to reduce costs and improve efficiency. Managing supplier and customer relationships for uninterrupted supply.",
        ar: "تخطيط وتنفيذ اللوجستيات المتكاملة لتوزيع المنتجات البترولية. تحسين شبكات التوزيع لتقليل التكاليف وتحسين الكفاءة. إدارة علاقات الموردين والعملاء لضمان استمرارية التوريد.",
    }
    ScopeStationTitle => "scope.station.title" {
        en: "Fuel Station Investment",
        ar: "الاستثمار في محطات الوقود",
    }
    ScopeStationDesc => "scope.station.desc" {
        en: "Feasibility studies for new or existing fuel stations. Operation and management with high profitability standards. Development of alternative energy solutions such as solar power systems.",
        ar: "دراسات جدوى لمحطات الوقود الجديدة أو القائمة. التشغيل والإدارة بمعايير ربحية عالية. تطوير حلول الطاقة البديلة مثل أنظمة الطاقة الشمسية.",
    }
    ScopeConsultingTitle => "scope.consulting.title" {
        en: "Technical & Consulting Services",
        ar: "الخدمات الفنية والاستشارية",
    }
    ScopeConsultingDesc => "scope.consulting.desc" {
        en: "Engineering and technical consulting for oil and gas projects. Market analysis and investment opportunity studies. Training teams on industry best practices and operational excellence.",
        ar: "الاستشارات الهندسية والفنية لمشاريع النفط والغاز. تحليل السوق ودراسات فرص الاستثمار. تدريب الفرق على أفضل ممارسات الصناعة والتميز التشغيلي.",
    }

    ValuesLabel => "values.label" {
        en: "What We Believe",
        ar: "ما نؤمن به",
    }
    ValuesTitle => "values.title" {
        en: "Our Values",
        ar: "قيمنا",
    }
    ValuesComprehensive => "values.comprehensive" {
        en: "Commitment to delivering comprehensive, integrated petroleum storage and distribution solutions.",
        ar: "الالتزام بتقديم حلول تخزين وتوزيع بترولية شاملة ومتكاملة.",
    }
    ValuesTechnology => "values.technology" {
        en: "Use of advanced technologies and global best practices for maximum quality and efficiency.",
        ar: "استخدام التقنيات المتقدمة وأفضل الممارسات العالمية لتحقيق أقصى جودة وكفاءة.",
    }
    ValuesSafety => "values.safety" {
        en: "Adherence to the highest safety and quality standards.",
        ar: "الالتزام بأعلى معايير السلامة والجودة.",
    }
    ValuesImprovement => "values.improvement" {
        en: "Continuous improvement through expert teams and evolving market understanding.",
        ar: "التحسين المستمر من خلال فرق الخبراء وفهم السوق المتطور.",
    }
    ValuesInnovation => "values.innovation" {
        en: "Providing innovative solutions that meet and exceed client expectations.",
        ar: "تقديم حلول مبتكرة تلبي وتتجاوز توقعات العملاء.",
    }

    AboutCtaTitle => "about.cta.title" {
        en: "Ready to Partner with Us?",
        ar: "هل أنت مستعد للشراكة معنا؟",
    }
    AboutCtaDescription => "about.cta.description" {
        en: "Let us help you achieve excellence in petroleum storage, logistics, and consulting.",
        ar: "دعنا نساعدك على تحقيق التميز في تخزين ولوجستيات واستشارات البترول.",
    }
    AboutCtaButton => "about.cta.button" {
        en: "Get Started Today",
        ar: "ابدأ اليوم",
    }

    PanelTitle => "panel.title" {
        en: "Discover Petra",
        ar: "اكتشف بترا",
    }
    PanelAbout => "panel.about" {
        en: "About Us",
        ar: "من نحن",
    }
    PanelActivities => "panel.activities" {
        en: "Activities",
        ar: "الأنشطة",
    }
    PanelSafety => "panel.safety" {
        en: "Safety",
        ar: "السلامة",
    }
    PanelServices => "panel.services" {
        en: "Services",
        ar: "الخدمات",
    }
    PanelWhyPetra => "panel.whyPetra" {
        en: "Why Petra",
        ar: "لماذا بترا",
    }
    PanelGovernance => "panel.governance" {
        en: "Corporate Governance",
        ar: "الحوكمة المؤسسية",
    }
    PanelEthics => "panel.ethics" {
        en: "Ethics and Governance",
        ar: "الأخلاق والحوكمة",
    }
    PanelValues => "panel.values" {
        en: "Our Values",
        ar: "قيمنا",
    }
    PanelSustainability => "panel.sustainability" {
        en: "Sustainability",
        ar: "الاستدامة",
    }
    PanelBack => "panel.back" {
        en: "Back",
        ar: "رجوع",
    }

    WhyPetraHeroTitle => "whyPetra.hero.title" {
        en: "Why Choose Petra?",
        ar: "لماذا تختار بترا؟",
    }
    WhyPetraHeroSubtitle => "whyPetra.hero.subtitle" {
        en: "Your strategic partner in fuel solutions… where trust begins.",
        ar: "شريكك الاستراتيجي في حلول الوقود… حيث تبدأ الثقة.",
    }
    WhyPetraStrengthsLabel => "whyPetra.strengths.label" {
        en: "Our Strengths",
        ar: "نقاط قوتنا",
    }
    WhyPetraStrengthsTitle => "whyPetra.strengths.title" {
        en: "Key Advantages",
        ar: "المزايا الرئيسية",
    }
    WhyPetraStrengthsProfessionalTeamTitle => "whyPetra.strengths.professionalTeam.title" {
        en: "Professional Team",
        ar: "فريق محترف",
    }
    WhyPetraStrengthsProfessionalTeamDesc => "whyPetra.strengths.professionalTeam.desc" {
        en: "Highly trained and certified professionals with extensive industry experience.",
        ar: "متخصصون مدربون ومعتمدون بخبرة واسعة في الصناعة.",
    }
    WhyPetraStrengthsCustomizedServicesTitle => "whyPetra.strengths.customizedServices.title" {
        en: "Customized Services",
        ar: "خدمات مخصصة",
    }
    WhyPetraStrengthsCustomizedServicesDesc => "whyPetra.strengths.customizedServices.desc" {
        en: "Tailored solutions based on each client's unique needs and requirements.",
        ar: "حلول مصممة بناءً على احتياجات ومتطلبات كل عميل.",
    }
    WhyPetraStrengthsEnvironmentalStandardsTitle => "whyPetra.strengths.environmentalStandards.title" {
        en: "Environmental Standards",
        ar: "المعايير البيئية",
    }
    WhyPetraStrengthsEnvironmentalStandardsDesc => "whyPetra.strengths.environmentalStandards.desc" {
        en: "Full commitment to environmental regulations and sustainable practices.",
        ar: "التزام كامل باللوائح البيئية والممارسات المستدامة.",
    }
    WhyPetraStrengthsExtensiveExperienceTitle => "whyPetra.strengths.extensiveExperience.title" {
        en: "Extensive Experience",
        ar: "خبرة واسعة",
    }
    WhyPetraStrengthsExtensiveExperienceDesc => "whyPetra.strengths.extensiveExperience.desc" {
        en: "Years of proven expertise in storage and distribution operations.",
        ar: "سنوات من الخبرة المثبتة في عمليات التخزين والتوزيع.",
    }
    WhyPetraStrengthsSafetyInfrastructureTitle => "whyPetra.strengths.safetyInfrastructure.title" {
        en: "Safety Infrastructure",
        ar: "بنية السلامة",
    }
    WhyPetraStrengthsSafetyInfrastructureDesc => "whyPetra.strengths.safetyInfrastructure.desc" {
        en: "High-safety standard storage facilities with advanced protection systems.",
        ar: "مرافق تخزين عالية الأمان مع أنظمة حماية متقدمة.",
    }
    WhyPetraStrengthsFmsSystemTitle => "whyPetra.strengths.fmsSystem.title" {
        en: "FMS System",
        ar: "نظام FMS",
    }
    WhyPetraStrengthsFmsSystemDesc => "whyPetra.strengths.fmsSystem.desc" {
        en: "Strategic Fuel Management System for optimal operational control.",
        ar: "نظام إدارة الوقود الاستراتيجي للتحكم التشغيلي الأمثل.",
    }

    FmsLabel => "fms.label" {
        en: "Smart Technology",
        ar: "التكنولوجيا الذكية",
    }
    FmsTitle => "fms.title" {
        en: "FMS Interactive Features",
        ar: "مميزات نظام FMS التفاعلية",
    }
    FmsSubtitle => "fms.subtitle" {
        en: "Advanced fuel management system providing complete operational control and visibility.",
        ar: "نظام إدارة وقود متقدم يوفر تحكمًا ورؤية تشغيلية كاملة.",
    }
    FmsLossPreventionTitle => "fms.lossPrevention.title" {
        en: "Loss Prevention",
        ar: "منع الفقد",
    }
    FmsLossPreventionLeakDetection => "fms.lossPrevention.leakDetection" {
        en: "Instant Leak Detection",
        ar: "كشف التسرب الفوري",
    }
    FmsLossPreventionAccessAlerts => "fms.lossPrevention.accessAlerts" {
        en: "Unauthorized Access Alerts",
        ar: "تنبيهات الوصول غير المصرح",
    }
    FmsLossPreventionUserTracking => "fms.lossPrevention.userTracking" {
        en: "User-Tracked Withdrawals",
        ar: "تتبع عمليات السحب",
    }
    FmsDataAccuracyTitle => "fms.dataAccuracy.title" {
        en: "Data Accuracy",
        ar: "دقة البيانات",
    }
    FmsDataAccuracySensorAccuracy => "fms.dataAccuracy.sensorAccuracy" {
        en: "99.9% Sensor Accuracy",
        ar: "دقة المستشعرات 99.9%",
    }
    FmsDataAccuracyDetailedReports => "fms.dataAccuracy.detailedReports" {
        en: "Detailed Reporting",
        ar: "تقارير مفصلة",
    }
    FmsDataAccuracyDataExports => "fms.dataAccuracy.dataExports" {
        en: "Multi-Format Exports",
        ar: "تصدير متعدد الصيغ",
    }
    FmsRealTimeMonitoringTitle => "fms.realTimeMonitoring.title" {
        en: "Real-Time Monitoring",
        ar: "المراقبة الحية",
    }
    FmsRealTimeMonitoringLiveFuelLevels => "fms.realTimeMonitoring.liveFuelLevels" {
        en: "Live Fuel Levels",
        ar: "مستويات الوقود الحية",
    }
    FmsRealTimeMonitoringRemoteMonitoring => "fms.realTimeMonitoring.remoteMonitoring" {
        en: "Remote Monitoring",
        ar: "المراقبة عن بعد",
    }
    FmsRealTimeMonitoringAutoAlerts => "fms.realTimeMonitoring.autoAlerts" {
        en: "Auto Low-Level Alerts",
        ar: "تنبيهات انخفاض المستوى",
    }

    SafetySystemsLabel => "safetySystems.label" {
        en: "Protection Systems",
        ar: "أنظمة الحماية",
    }
    SafetySystemsTitle => "safetySystems.title" {
        en: "Safety Systems",
        ar: "أنظمة السلامة",
    }
    SafetySystemsFirefightingTitle => "safetySystems.firefighting.title" {
        en: "Firefighting Systems",
        ar: "أنظمة مكافحة الحرائق",
    }
    SafetySystemsFirefightingDesc => "safetySystems.firefighting.desc" {
        en: "Advanced fire suppression systems installed throughout all facilities.",
        ar: "أنظمة إطفاء متقدمة مثبتة في جميع المرافق.",
    }
    SafetySystemsSurveillanceTitle => "safetySystems.surveillance.title" {
        en: "HD Surveillance",
        ar: "مراقبة عالية الدقة",
    }
    SafetySystemsSurveillanceDesc => "safetySystems.surveillance.desc" {
        en: "High-resolution cameras providing 24/7 monitoring coverage.",
        ar: "كاميرات عالية الدقة توفر تغطية مراقبة على مدار الساعة.",
    }
    SafetySystemsExtinguishersTitle => "safetySystems.extinguishers.title" {
        en: "Fire Extinguishers",
        ar: "طفايات الحريق",
    }
    SafetySystemsExtinguishersDesc => "safetySystems.extinguishers.desc" {
        en: "Strategically placed extinguishers for rapid emergency response.",
        ar: "طفايات موزعة استراتيجياً للاستجابة السريعة للطوارئ.",
    }

    VehicleControlLabel => "vehicleControl.label" {
        en: "Facility Management",
        ar: "إدارة المرافق",
    }
    VehicleControlTitle => "vehicleControl.title" {
        en: "Vehicle & Facility Control",
        ar: "التحكم في المركبات والمرافق",
    }
    VehicleControlSecureAccessTitle => "vehicleControl.secureAccess.title" {
        en: "Secure Access",
        ar: "دخول آمن",
    }
    VehicleControlSecureAccessDesc => "vehicleControl.secureAccess.desc" {
        en: "Controlled vehicle entry with verification protocols.",
        ar: "دخول مركبات متحكم به مع بروتوكولات التحقق.",
    }
    VehicleControlMonitoredEntryTitle => "vehicleControl.monitoredEntry.title" {
        en: "Monitored Entry",
        ar: "دخول مراقب",
    }
    VehicleControlMonitoredEntryDesc => "vehicleControl.monitoredEntry.desc" {
        en: "Real-time tracking of all entry and exit points.",
        ar: "تتبع حي لجميع نقاط الدخول والخروج.",
    }
    VehicleControlWaitingZonesTitle => "vehicleControl.waitingZones.title" {
        en: "Safe Waiting Zones",
        ar: "مناطق انتظار آمنة",
    }
    VehicleControlWaitingZonesDesc => "vehicleControl.waitingZones.desc" {
        en: "Designated areas for safe vehicle staging.",
        ar: "مناطق مخصصة لوقوف المركبات الآمن.",
    }
    VehicleControlTrafficFlowTitle => "vehicleControl.trafficFlow.title" {
        en: "Intelligent Flow",
        ar: "تدفق ذكي",
    }
    VehicleControlTrafficFlowDesc => "vehicleControl.trafficFlow.desc" {
        en: "Optimized traffic patterns for maximum efficiency.",
        ar: "أنماط حركة مرور محسنة لأقصى كفاءة.",
    }

    WhyPetraClosingText => "whyPetra.closing.text" {
        en: "We provide fully integrated logistics solutions where safety and efficiency come first…",
        ar: "نقدم حلول لوجستية متكاملة حيث تأتي السلامة والكفاءة أولاً…",
    }
    WhyPetraClosingSignature => "whyPetra.closing.signature" {
        en: "Petra — Your Trusted Partner",
        ar: "بترا — شريكك الموثوق",
    }

    PillarsLabel => "pillars.label" {
        en: "Core Pillars",
        ar: "الركائز الأساسية",
    }
    PillarsTitle => "pillars.title" {
        en: "What Drives Us",
        ar: "ما يحركنا",
    }
    PillarsTechnologyTitle => "pillars.technology.title" {
        en: "Advanced Technology",
        ar: "تكنولوجيا متقدمة",
    }
    PillarsTechnologyDesc => "pillars.technology.desc" {
        en: "Cutting-edge systems for optimal operations.",
        ar: "أنظمة متطورة لعمليات مثالية.",
    }
    PillarsSafetyTitle => "pillars.safety.title" {
        en: "Safety Commitment",
        ar: "التزام بالسلامة",
    }
    PillarsSafetyDesc => "pillars.safety.desc" {
        en: "Zero-compromise approach to safety standards.",
        ar: "نهج بدون تنازل لمعايير السلامة.",
    }
    PillarsCustomerTitle => "pillars.customer.title" {
        en: "Customer Focus",
        ar: "التركيز على العميل",
    }
    PillarsCustomerDesc => "pillars.customer.desc" {
        en: "Client satisfaction is our top priority.",
        ar: "رضا العميل هو أولويتنا القصوى.",
    }
    PillarsExpertiseTitle => "pillars.expertise.title" {
        en: "Fuel Expertise",
        ar: "خبرة الوقود",
    }
    PillarsExpertiseDesc => "pillars.expertise.desc" {
        en: "Deep knowledge of the petroleum industry.",
        ar: "معرفة عميقة بصناعة البترول.",
    }

    SafetyPageHeroTitle => "safety.page.hero.title" {
        en: "Safety",
        ar: "السلامة",
    }
    SafetyPageHeroSubtitle => "safety.page.hero.subtitle" {
        en: "Setting the highest safety standards in petroleum storage and transportation",
        ar: "نحو أعلى معايير السلامة في تخزين ونقل المشتقات النفطية",
    }
    SafetyPageIntroLabel => "safety.page.intro.label" {
        en: "Safety",
        ar: "السلامة",
    }
    SafetyPageIntroTitle => "safety.page.intro.title" {
        en: "Safety at Petra",
        ar: "السلامة في بيترا",
    }
    SafetyPageIntroText1 => "safety.page.intro.text1" {
        en: "Petra is a leading company providing integrated solutions for the storage and transportation of petroleum derivatives, in addition to specialized consultancy services within Syria’s energy sector.",
        ar: "تُعد شركة بيترا من الشركات الرائدة في تقديم حلول متكاملة لتخزين ونقل المشتقات النفطية، إلى جانب الخدمات الاستشارية المتخصصة في قطاع الطاقة داخل سوريا.",
    }
    SafetyPageIntroText2 => "safety.page.intro.text2" {
        en: "Safety is at the core of all our operations. We implement rigorous systems and procedures to protect people, assets, and the environment, while adhering to the highest local and international safety standards.",
        ar: "نضع السلامة في صميم جميع عملياتنا، ونعتمد أنظمة وإجراءات دقيقة تضمن حماية الأفراد والممتلكات والبيئة، مع الالتزام بأعلى المعايير المحلية والدولية في هذا القطاع الحيوي.",
    }
    SafetyPageProceduresLabel => "safety.page.procedures.label" {
        en: "Technical Safety Protocols",
        ar: "البروتوكولات الفنية للسلامة",
    }
    SafetyPageProceduresTitle => "safety.page.procedures.title" {
        en: "Daily Safety Procedures",
        ar: "إجراءات السلامة اليومية",
    }
    SafetyPageProceduresVehicleInspectionTitle => "safety.page.procedures.vehicleInspection.title" {
        en: "Vehicle Inspection",
        ar: "الفحص الفني للمركبات",
    }
    SafetyPageProceduresVehicleInspectionDesc => "safety.page.procedures.vehicleInspection.desc" {
        en: "Comprehensive pre-trip inspections to ensure full safety compliance",
        ar: "إجراء فحوصات شاملة قبل كل رحلة لضمان الالتزام الكامل بمعايير السلامة",
    }
    SafetyPageProceduresDriverAssessmentTitle => "safety.page.procedures.driverAssessment.title" {
        en: "Driver Readiness",
        ar: "جاهزية السائقين",
    }
    SafetyPageProceduresDriverAssessmentDesc => "safety.page.procedures.driverAssessment.desc" {
        en: "Regular assessment of driver fitness and safety compliance",
        ar: "تقييم دوري للياقة السائقين والتزامهم ببروتوكولات السلامة المعتمدة",
    }
    SafetyPageProceduresEmergencyPlansTitle => "safety.page.procedures.emergencyPlans.title" {
        en: "Emergency Response Plans",
        ar: "خطط الاستجابة للطوارئ",
    }
    SafetyPageProceduresEmergencyPlansDesc => "safety.page.procedures.emergencyPlans.desc" {
        en: "Predefined procedures for handling various emergency scenarios",
        ar: "إجراءات محددة مسبقًا للتعامل مع مختلف سيناريوهات الطوارئ والحوادث",
    }
    SafetyPageProceduresMonitoringSystemsTitle => "safety.page.procedures.monitoringSystems.title" {
        en: "Monitoring Systems",
        ar: "أنظمة المراقبة",
    }
    SafetyPageProceduresMonitoringSystemsDesc => "safety.page.procedures.monitoringSystems.desc" {
        en: "Continuous monitoring to ensure safe and compliant operations",
        ar: "مراقبة مستمرة للعمليات لضمان التشغيل الآمن والالتزام بالمعايير",
    }
    SafetyPageTrainingLabel => "safety.page.training.label" {
        en: "Training Programs",
        ar: "برامج التدريب",
    }
    SafetyPageTrainingTitle => "safety.page.training.title" {
        en: "Safety Training",
        ar: "التدريب على السلامة",
    }
    SafetyPageTrainingEmergencyResponseTitle => "safety.page.training.emergencyResponse.title" {
        en: "Emergency Response Training",
        ar: "تدريب الاستجابة للطوارئ",
    }
    SafetyPageTrainingEmergencyResponseDesc => "safety.page.training.emergencyResponse.desc" {
        en: "Preparing teams for fast and effective emergency response",
        ar: "تأهيل الفرق للاستجابة السريعة والفعّالة في حالات الطوارئ",
    }
    SafetyPageTrainingHazardousMaterialsTitle => "safety.page.training.hazardousMaterials.title" {
        en: "Hazardous Materials Handling",
        ar: "التعامل مع المواد الخطرة",
    }
    SafetyPageTrainingHazardousMaterialsDesc => "safety.page.training.hazardousMaterials.desc" {
        en: "Safe handling procedures for flammable and hazardous materials",
        ar: "إجراءات آمنة للتعامل مع المواد القابلة للاشتعال والمواد الخطرة",
    }
    SafetyPageTrainingAccidentPreventionTitle => "safety.page.training.accidentPrevention.title" {
        en: "Accident Prevention",
        ar: "منع الحوادث",
    }
    SafetyPageTrainingAccidentPreventionDesc => "safety.page.training.accidentPrevention.desc" {
        en: "Risk awareness and proactive accident prevention strategies",
        ar: "تعزيز الوعي بالمخاطر وتطبيق استراتيجيات استباقية للحد من الحوادث",
    }
    SafetyPageTrainingSafetyEquipmentTitle => "safety.page.training.safetyEquipment.title" {
        en: "Safety Equipment",
        ar: "معدات السلامة",
    }
    SafetyPageTrainingSafetyEquipmentDesc => "safety.page.training.safetyEquipment.desc" {
        en: "Proper use of personal protective and safety equipment",
        ar: "الاستخدام الصحيح لمعدات الوقاية الشخصية ومعدات السلامة",
    }
    SafetyPageStandardsLabel => "safety.page.standards.label" {
        en: "Standards",
        ar: "المعايير",
    }
    SafetyPageStandardsTitle => "safety.page.standards.title" {
        en: "Compliance & Standards",
        ar: "الامتثال والمعايير",
    }
    SafetyPageStandardsSubtitle => "safety.page.standards.subtitle" {
        en: "We strictly adhere to recognized safety regulations and standards",
        ar: "نلتزم التزامًا صارمًا باللوائح والمعايير المعتمدة للسلامة",
    }
    SafetyPageStandardsSyrianRegulationsTitle => "safety.page.standards.syrianRegulations.title" {
        en: "Local Regulations",
        ar: "الأنظمة المحلية",
    }
    SafetyPageStandardsSyrianRegulationsDesc => "safety.page.standards.syrianRegulations.desc" {
        en: "Full compliance with Syrian regulatory safety requirements",
        ar: "الامتثال الكامل لتعليمات السلامة الصادرة عن الجهات التنظيمية في سوريا",
    }
    SafetyPageStandardsRegionalStandardsTitle => "safety.page.standards.regionalStandards.title" {
        en: "Regional Standards",
        ar: "المعايير الإقليمية",
    }
    SafetyPageStandardsRegionalStandardsDesc => "safety.page.standards.regionalStandards.desc" {
        en: "Adoption of regionally recognized safety best practices",
        ar: "تطبيق أفضل ممارسات السلامة المعتمدة إقليميًا",
    }
    SafetyPageStandardsAdrGuidelinesTitle => "safety.page.standards.adrGuidelines.title" {
        en: "ADR Guidelines",
        ar: "إرشادات ADR",
    }
    SafetyPageStandardsAdrGuidelinesDesc => "safety.page.standards.adrGuidelines.desc" {
        en: "Compliance with European ADR hazardous transport standards",
        ar: "الالتزام بالمعايير الأوروبية لنقل المواد الخطرة",
    }
    SafetyPageStandardsInternalAuditsTitle => "safety.page.standards.internalAudits.title" {
        en: "Internal Audits",
        ar: "التدقيق الداخلي",
    }
    SafetyPageStandardsInternalAuditsDesc => "safety.page.standards.internalAudits.desc" {
        en: "Regular audits to ensure continuous safety improvement",
        ar: "مراجعات دورية لضمان التحسين المستمر لمعايير السلامة",
    }
    SafetyPageMonitoringLabel => "safety.page.monitoring.label" {
        en: "Monitoring Systems",
        ar: "أنظمة المراقبة",
    }
    SafetyPageMonitoringTitle => "safety.page.monitoring.title" {
        en: "Monitoring & Control",
        ar: "المراقبة والتحكم",
    }
    SafetyPageMonitoringGpsTrackingTitle => "safety.page.monitoring.gpsTracking.title" {
        en: "GPS Tracking",
        ar: "تتبع GPS",
    }
    SafetyPageMonitoringGpsTrackingDesc => "safety.page.monitoring.gpsTracking.desc" {
        en: "Real-time vehicle tracking to ensure safe routes",
        ar: "تتبع المركبات لحظيًا لضمان الالتزام بالمسارات الآمنة",
    }
    SafetyPageMonitoringRealTimeAlertsTitle => "safety.page.monitoring.realTimeAlerts.title" {
        en: "Real-Time Alerts",
        ar: "تنبيهات فورية",
    }
    SafetyPageMonitoringRealTimeAlertsDesc => "safety.page.monitoring.realTimeAlerts.desc" {
        en: "Instant alerts for any unsafe behavior or incidents",
        ar: "إشعارات مباشرة عند حدوث أي سلوك غير آمن",
    }
    SafetyPageMonitoringFuelMonitoringTitle => "safety.page.monitoring.fuelMonitoring.title" {
        en: "Fuel Monitoring",
        ar: "مراقبة الوقود",
    }
    SafetyPageMonitoringFuelMonitoringDesc => "safety.page.monitoring.fuelMonitoring.desc" {
        en: "Fuel usage analysis to detect irregularities",
        ar: "تحليل استهلاك الوقود للكشف المبكر عن أي خلل",
    }
    SafetyPageMonitoringAccessControlTitle => "safety.page.monitoring.accessControl.title" {
        en: "Access Control",
        ar: "التحكم بالوصول",
    }
    SafetyPageMonitoringAccessControlDesc => "safety.page.monitoring.accessControl.desc" {
        en: "Ensuring authorized access to vehicles and systems only",
        ar: "ضمان وصول المصرّح لهم فقط إلى المركبات والأنظمة",
    }
    SafetyPageCtaTitle => "safety.page.cta.title" {
        en: "Safety Is Our Foundation",
        ar: "السلامة أساس عملنا",
    }
    SafetyPageCtaText => "safety.page.cta.text" {
        en: "Contact us to learn more about our safety systems and procedures",
        ar: "تواصل معنا لمعرفة المزيد عن أنظمة وإجراءات السلامة المعتمدة لدينا",
    }
    SafetyPageCtaButton => "safety.page.cta.button" {
        en: "Contact Us",
        ar: "تواصل معنا",
    }
    SafetyPageCtaSignature => "safety.page.cta.signature" {
        en: "Petra – Commitment to Safety",
        ar: "بيترا – التزام دائم بالسلامة",
    }

    ServicesPageLabel => "services.page.label" {
        en: "Services",
        ar: "الخدمات",
    }
    ServicesPageHeroTitle => "services.page.hero.title" {
        en: "Our Services",
        ar: "خدماتنا",
    }
    ServicesPageHeroSubtitle => "services.page.hero.subtitle" {
        en: "What We Do",
        ar: "ماذا نقدم",
    }
    ServicesPageMainLabel => "services.page.main.label" {
        en: "Our Expertise",
        ar: "مجالات خبرتنا",
    }
    ServicesPageMainTitle => "services.page.main.title" {
        en: "Integrated Petroleum Solutions",
        ar: "حلول متكاملة لقطاع المحروقات",
    }
    ServicesPageMainSubtitle => "services.page.main.subtitle" {
        en: "We deliver a comprehensive range of services designed to support petroleum operations from storage to distribution and investment.",
        ar: "نقدم مجموعة شاملة من الخدمات المصممة لدعم عمليات قطاع النفط من التخزين وحتى التوزيع والاستثمار.",
    }
    ServicesPageStorageLabel => "services.page.storage.label" {
        en: "Petroleum Storage",
        ar: "تخزين المحروقات",
    }
    ServicesPageStorageTitle => "services.page.storage.title" {
        en: "Safe & Efficient Storage Solutions",
        ar: "حلول تخزين آمنة وفعّالة",
    }
    ServicesPageStorageDesc => "services.page.storage.desc" {
        en: "We provide advanced petroleum storage solutions that ensure maximum safety and efficiency while complying with international operational standards.",
        ar: "نوفّر حلول تخزين متقدمة للمحروقات تضمن أعلى مستويات السلامة والكفاءة، مع الالتزام بالمعايير الدولية في تشغيل وإدارة مرافق التخزين.",
    }
    ServicesPageStoragePoint1 => "services.page.storage.point1" {
        en: "Storage of gasoline, diesel, lubricants, and various petroleum products",
        ar: "تخزين البنزين، الديزل، الزيوت، ومنتجات بترولية متنوعة",
    }
    ServicesPageStoragePoint2 => "services.page.storage.point2" {
        en: "Operation and management of storage tanks in accordance with global safety standards",
        ar: "تشغيل وإدارة خزانات التخزين وفق المعايير العالمية للسلامة",
    }
    ServicesPageStoragePoint3 => "services.page.storage.point3" {
        en: "Advanced inventory monitoring systems to minimize losses and improve accuracy",
        ar: "أنظمة مراقبة المخزون المتقدمة لتقليل الفاقد وزيادة الدقة",
    }
    ServicesPageLearnMore => "services.page.learnMore" {
        en: "Learn More",
        ar: "اعرف المزيد",
    }
    ServicesPageSupplyChainLabel => "services.page.supplyChain.label" {
        en: "Supply Chain Management",
        ar: "إدارة سلاسل التوريد",
    }
    ServicesPageSupplyChainTitle => "services.page.supplyChain.title" {
        en: "Integrated Logistics Management",
        ar: "إدارة لوجستية متكاملة",
    }
    ServicesPageSupplyChainDesc => "services.page.supplyChain.desc" {
        en: "Comprehensive supply chain services ensuring efficient petroleum distribution through planning, execution, and continuous optimization.",
        ar: "خدمات متكاملة لإدارة سلاسل التوريد تضمن توزيع المحروقات بكفاءة عالية من خلال التخطيط والتنفيذ والتحسين المستمر.",
    }
    ServicesPageSupplyChainPoint1 => "services.page.supplyChain.point1" {
        en: "Planning and execution of petroleum logistics operations",
        ar: "تخطيط وتنفيذ العمليات اللوجستية لتوزيع المحروقات",
    }
    ServicesPageSupplyChainPoint2 => "services.page.supplyChain.point2" {
        en: "Optimization of distribution networks to reduce costs and increase efficiency",
        ar: "تحسين شبكات التوزيع لتقليل التكاليف وزيادة الكفاءة",
    }
    ServicesPageSupplyChainPoint3 => "services.page.supplyChain.point3" {
        en: "Supplier and customer relationship management to ensure supply continuity",
        ar: "إدارة علاقات الموردين والعملاء لضمان استمرارية الإمداد",
    }
    ServicesPageFuelStationLabel => "services.page.fuelStation.label" {
        en: "Fuel Stations Investment",
        ar: "الاستثمار في محطات الوقود",
    }
    ServicesPageFuelStationTitle => "services.page.fuelStation.title" {
        en: "Fuel Station Development & Management",
        ar: "تطوير وإدارة محطات الوقود",
    }
    ServicesPageFuelStationDesc => "services.page.fuelStation.desc" {
        en: "We support investors and operators in developing and managing fuel stations with a strong focus on profitability and sustainability.",
        ar: "نساعد المستثمرين والمشغلين على تطوير وإدارة محطات الوقود وفق أعلى معايير الربحية والاستدامة.",
    }
    ServicesPageFuelStationPoint1 => "services.page.fuelStation.point1" {
        en: "Comprehensive feasibility studies for new and existing fuel stations",
        ar: "إعداد دراسات جدوى شاملة لمحطات الوقود الجديدة والقائمة",
    }
    ServicesPageFuelStationPoint2 => "services.page.fuelStation.point2" {
        en: "Operational management based on high efficiency and profitability standards",
        ar: "تشغيل وإدارة المحطات وفق معايير عالية للكفاءة والربحية",
    }
    ServicesPageFuelStationPoint3 => "services.page.fuelStation.point3" {
        en: "Development of alternative energy solutions such as solar power systems",
        ar: "تطوير حلول الطاقة البديلة مثل أنظمة الطاقة الشمسية",
    }
    ServicesPageConsultingLabel => "services.page.consulting.label" {
        en: "Technical & Consulting Services",
        ar: "الخدمات الفنية والاستشارية",
    }
    ServicesPageConsultingTitle => "services.page.consulting.title" {
        en: "Professional Engineering & Consulting",
        ar: "استشارات هندسية متخصصة",
    }
    ServicesPageConsultingDesc => "services.page.consulting.desc" {
        en: "We provide specialized technical and consulting services to support oil & gas projects and enable informed investment decisions.",
        ar: "نقدم خدمات فنية واستشارية متقدمة لدعم مشاريع النفط والغاز وتمكين العملاء من اتخاذ قرارات استثمارية مدروسة.",
    }
    ServicesPageConsultingPoint1 => "services.page.consulting.point1" {
        en: "Engineering and technical consulting for oil & gas projects",
        ar: "استشارات هندسية وفنية لمشاريع النفط والغاز",
    }
    ServicesPageConsultingPoint2 => "services.page.consulting.point2" {
        en: "Market analysis and investment opportunity assessments",
        ar: "تحليل الأسواق ودراسة فرص الاستثمار",
    }
    ServicesPageConsultingPoint3 => "services.page.consulting.point3" {
        en: "Training programs focused on best practices and operational excellence",
        ar: "تدريب الكوادر على أفضل الممارسات التشغيلية",
    }
    ServicesPageAdditionalLabel => "services.page.additional.label" {
        en: "Additional Services",
        ar: "خدمات إضافية",
    }
    ServicesPageAdditionalTitle => "services.page.additional.title" {
        en: "Value-Added Supporting Services",
        ar: "خدمات داعمة تعزز الأداء",
    }
    ServicesPageAdditionalFleetManagementTitle => "services.page.additional.fleetManagement.title" {
        en: "Fleet Management Solutions",
        ar: "حلول إدارة الأسطول",
    }
    ServicesPageAdditionalFleetManagementDesc => "services.page.additional.fleetManagement.desc" {
        en: "Advanced fleet management systems to monitor, control, and optimize transportation operations safely and efficiently.",
        ar: "أنظمة متطورة لإدارة ومراقبة أساطيل النقل، تضمن السلامة التشغيلية وتحسين الأداء وخفض التكاليف.",
    }
    ServicesPageAdditionalRoadSupportTitle => "services.page.additional.roadSupport.title" {
        en: "On-Road Support Services",
        ar: "خدمات الدعم على الطريق",
    }
    ServicesPageAdditionalRoadSupportDesc => "services.page.additional.roadSupport.desc" {
        en: "24/7 technical and operational road support ensuring uninterrupted transportation.",
        ar: "خدمات دعم فني وتشغيلي على مدار الساعة لضمان استمرارية النقل.",
    }
    ServicesPageAdditionalLongDistanceTitle => "services.page.additional.longDistance.title" {
        en: "Long-Distance Transportation",
        ar: "النقل لمسافات طويلة",
    }
    ServicesPageAdditionalLongDistanceDesc => "services.page.additional.longDistance.desc" {
        en: "Reliable long-distance petroleum transportation using modern fleets and real-time tracking technologies.",
        ar: "خدمات نقل موثوقة للمحروقات لمسافات طويلة باستخدام أساطيل حديثة وتقنيات تتبع آنية.",
    }
    ServicesPageWhyUsLabel => "services.page.whyUs.label" {
        en: "Why Choose Us",
        ar: "لماذا نحن",
    }
    ServicesPageWhyUsTitle => "services.page.whyUs.title" {
        en: "Your Trusted Petroleum Partner",
        ar: "شريك موثوق في خدمات المحروقات",
    }
    ServicesPageWhyUsExpertiseTitle => "services.page.whyUs.expertise.title" {
        en: "Industry Expertise",
        ar: "خبرة متخصصة",
    }
    ServicesPageWhyUsExpertiseDesc => "services.page.whyUs.expertise.desc" {
        en: "Extensive experience in petroleum storage, logistics, and energy investments.",
        ar: "خبرات متراكمة في تخزين المحروقات والخدمات اللوجستية.",
    }
    ServicesPageWhyUsReliabilityTitle => "services.page.whyUs.reliability.title" {
        en: "Operational Reliability",
        ar: "موثوقية التشغيل",
    }
    ServicesPageWhyUsReliabilityDesc => "services.page.whyUs.reliability.desc" {
        en: "Consistent, safe, and fully compliant operational standards.",
        ar: "عمليات مستقرة وآمنة ومتوافقة مع المعايير المعتمدة.",
    }
    ServicesPageWhyUsSupportTitle => "services.page.whyUs.support.title" {
        en: "Dedicated Support",
        ar: "دعم متواصل",
    }
    ServicesPageWhyUsSupportDesc => "services.page.whyUs.support.desc" {
        en: "Professional support teams assisting you at every stage.",
        ar: "فرق دعم متخصصة لمساندتكم في جميع مراحل العمل.",
    }
    ServicesPageWhyUsSpeedTitle => "services.page.whyUs.speed.title" {
        en: "Fast Execution",
        ar: "سرعة التنفيذ",
    }
    ServicesPageWhyUsSpeedDesc => "services.page.whyUs.speed.desc" {
        en: "Efficient processes designed to deliver results on time.",
        ar: "إجراءات فعالة تضمن إنجاز الأعمال في الوقت المحدد.",
    }
    ServicesPageWhyUsTeamTitle => "services.page.whyUs.team.title" {
        en: "Qualified Team",
        ar: "فريق محترف",
    }
    ServicesPageWhyUsTeamDesc => "services.page.whyUs.team.desc" {
        en: "Highly skilled engineers and industry professionals.",
        ar: "مهندسون وخبراء مؤهلون يتمتعون بكفاءة عالية.",
    }
    ServicesPageWhyUsInnovationTitle => "services.page.whyUs.innovation.title" {
        en: "Innovation Driven",
        ar: "الابتكار والتطوير",
    }
    ServicesPageWhyUsInnovationDesc => "services.page.whyUs.innovation.desc" {
        en: "Adoption of modern technologies and sustainable energy solutions.",
        ar: "اعتماد أحدث التقنيات وحلول الطاقة المستدامة.",
    }
    ServicesPageCtaTitle => "services.page.cta.title" {
        en: "Ready to Power Your Operations?",
        ar: "جاهزون لدعم أعمالكم؟",
    }
    ServicesPageCtaText => "services.page.cta.text" {
        en: "Contact us today to discover how our services can support your business growth and operational excellence.",
        ar: "تواصل معنا اليوم لاكتشاف كيف يمكن لخدماتنا دعم نمو أعمالكم وتحقيق التميز التشغيلي.",
    }
    ServicesPageCtaButton => "services.page.cta.button" {
        en: "Contact Us",
        ar: "تواصل معنا",
    }

    ActivitiesLabel => "activities.label" {
        en: "Activities",
        ar: "الأنشطة",
    }
    ActivitiesHeroTitle => "activities.hero.title" {
        en: "Our Activities",
        ar: "أنشطتنا",
    }
    ActivitiesHeroSubtitle => "activities.hero.subtitle" {
        en: "Specialization is the Key to Success",
        ar: "التخصص هو مفتاح النجاح",
    }
    ActivitiesStatsOperations => "activities.stats.operations" {
        en: "Completed Operations",
        ar: "عمليات منجزة",
    }
    ActivitiesStatsKilometers => "activities.stats.kilometers" {
        en: "Kilometers Covered",
        ar: "كيلومترات مقطوعة",
    }
    ActivitiesStatsTeam => "activities.stats.team" {
        en: "Team Members",
        ar: "أعضاء الفريق",
    }
    ActivitiesStatsExperience => "activities.stats.experience" {
        en: "Years of Experience",
        ar: "سنوات الخبرة",
    }
    ActivitiesIntroTitle => "activities.intro.title" {
        en: "Comprehensive Petroleum Storage and Transport Solutions",
        ar: "حلول متكاملة للتخزين والنقل البترولي",
    }
    ActivitiesIntroText => "activities.intro.text" {
        en: "Petra Company is a leading provider of petroleum storage and transport solutions, alongside specialized consulting services, within local and regional markets. Our strict commitment to quality and operational efficiency has made us a recognized leader in the petroleum solutions sector.",
        ar: "شركة بيترا رائدة في تقديم حلول التخزين والنقل للمشتقات النفطية، بالإضافة إلى الخدمات الاستشارية المتخصصة، داخل الأسواق المحلية والإقليمية. وبفضل التزامنا الصارم بالجودة والكفاءة التشغيلية، أصبحنا أحد الشركات الرائدة في قطاع حلول الطاقة البترولية.",
    }
    ActivitiesSectionExpertiseTitle => "activities.section.expertise.title" {
        en: "Advanced Operational Expertise",
        ar: "خبرة تشغيلية متقدمة",
    }
    ActivitiesSectionExpertiseText => "activities.section.expertise.text" {
        en: "Over the years, we have executed thousands of successful operations for the storage and transport of various petroleum products in highly sensitive operational environments, requiring precision and professionalism in handling hazardous materials. We also provide specialized engineering and technical consulting services.",
        ar: "على مدار السنوات الماضية، نفذنا آلاف العمليات الناجحة لتخزين ونقل مشتقات نفطية متعددة ضمن بيئات تشغيلية عالية الحساسية تتطلب دقة واحترافية في التعامل مع المواد الخطرة، بالإضافة لتقديم استشارات هندسية وتقنية متخصصة.",
    }
    ActivitiesSectionExpertisePoint1 => "activities.section.expertise.point1" {
        en: "Storage and transport of crude oil and various petroleum derivatives",
        ar: "تخزين ونقل النفط الخام ومشتقاته البترولية المختلفة",
    }
    ActivitiesSectionExpertisePoint2 => "activities.section.expertise.point2" {
        en: "Professional handling of hazardous materials following the highest safety standards",
        ar: "التعامل الاحترافي مع المواد الخطرة وفق أعلى معايير السلامة",
    }
    ActivitiesSectionExpertisePoint3 => "activities.section.expertise.point3" {
        en: "Providing specialized engineering and technical consulting to ensure optimal performance",
        ar: "تقديم استشارات هندسية وتقنية متخصصة لضمان أفضل أداء",
    }
    ActivitiesSectionFleetTitle => "activities.section.fleet.title" {
        en: "Modern Fleet & Advanced Technology",
        ar: "أسطول حديث وتقنيات متطورة",
    }
    ActivitiesSectionFleetText => "activities.section.fleet.text" {
        en: "Our modern fleet includes advanced tankers and smart tracking systems that ensure maximum safety during transport and secure storage. Real-time monitoring allows precise tracking of shipments throughout the journey.",
        ar: "يمتلك أسطولنا الحديث صهاريج نقل متطورة وأنظمة تتبع ذكية تضمن أعلى مستويات الأمان أثناء النقل، وتدعم عمليات التخزين الآمن، كما تتيح مراقبة مستمرة لمسارات الشحنات.",
    }
    ActivitiesSectionFleetPoint1 => "activities.section.fleet.point1" {
        en: "Specialized, modern tankers for storage and transport",
        ar: "صهاريج وقود حديثة ومتخصصة للتخزين والنقل",
    }
    ActivitiesSectionFleetPoint2 => "activities.section.fleet.point2" {
        en: "Advanced real-time tracking and monitoring systems",
        ar: "أنظمة تتبع ومراقبة لحظية باستخدام تقنيات متقدمة",
    }
    ActivitiesSectionFleetPoint3 => "activities.section.fleet.point3" {
        en: "Millions of kilometers traveled safely across diverse terrains",
        ar: "قطع ملايين الكيلومترات عبر طرق وتضاريس متنوعة بأمان",
    }
    ActivitiesSectionTeamTitle => "activities.section.team.title" {
        en: "Professional Human Capital",
        ar: "كوادر بشرية محترفة",
    }
    ActivitiesSectionTeamText => "activities.section.team.text" {
        en: "Petra's team is the backbone of our success, consisting of hundreds of drivers, technicians, and consultants working under certified safety systems and continuous training programs to ensure reliable services.",
        ar: "يشكّل فريق بيترا حجر الأساس في نجاح أعمالنا، حيث يضم مئات السائقين والفنيين والمستشارين الإداريين المؤهلين للعمل وفق أنظمة سلامة معتمدة وبرامج تدريب مستمرة لضمان موثوقية الخدمات.",
    }
    ActivitiesSectionTeamPoint1 => "activities.section.team.point1" {
        en: "Experienced drivers, technicians, and consultants",
        ar: "مئات السائقين والفنيين والاستشاريين ذوي الخبرة",
    }
    ActivitiesSectionTeamPoint2 => "activities.section.team.point2" {
        en: "Continuous training programs focused on safety, efficiency, and quality",
        ar: "برامج تدريب مستمرة تركز على السلامة والكفاءة والجودة",
    }
    ActivitiesSectionTeamPoint3 => "activities.section.team.point3" {
        en: "Strict adherence to operational standards and safety procedures",
        ar: "الالتزام الصارم بالمعايير التشغيلية وأنظمة السلامة",
    }
    ActivitiesCapabilitiesLabel => "activities.capabilities.label" {
        en: "Our Capabilities",
        ar: "قدراتنا",
    }
    ActivitiesCapabilitiesTitle => "activities.capabilities.title" {
        en: "Specialized Services",
        ar: "خدماتنا المتخصصة",
    }
    ActivitiesCapabilitiesCrudeOilTitle => "activities.capabilities.crudeOil.title" {
        en: "Crude Oil",
        ar: "النفط الخام",
    }
    ActivitiesCapabilitiesCrudeOilDesc => "activities.capabilities.crudeOil.desc" {
        en: "Safe storage and transport of crude oil with precise operational standards.",
        ar: "تخزين ونقل النفط الخام بأعلى مستويات الأمان ودقة التشغيل.",
    }
    ActivitiesCapabilitiesDieselTitle => "activities.capabilities.diesel.title" {
        en: "Diesel",
        ar: "الديزل",
    }
    ActivitiesCapabilitiesDieselDesc => "activities.capabilities.diesel.desc" {
        en: "Reliable diesel storage and transport services while maintaining product quality.",
        ar: "خدمات نقل وتخزين موثوقة لمادة الديزل مع الحفاظ على الجودة.",
    }
    ActivitiesCapabilitiesGasolineTitle => "activities.capabilities.gasoline.title" {
        en: "Gasoline",
        ar: "البنزين",
    }
    ActivitiesCapabilitiesGasolineDesc => "activities.capabilities.gasoline.desc" {
        en: "Storage and transport of gasoline according to global safety standards and smart monitoring systems.",
        ar: "تخزين ونقل البنزين وفق معايير السلامة العالمية وأنظمة المراقبة الذكية.",
    }
    ActivitiesCapabilitiesLubricantsTitle => "activities.capabilities.lubricants.title" {
        en: "Industrial Lubricants",
        ar: "الزيوت الصناعية",
    }
    ActivitiesCapabilitiesLubricantsDesc => "activities.capabilities.lubricants.desc" {
        en: "Professional handling and transport of industrial oils and lubricants, with consulting services available when needed.",
        ar: "التعامل والنقل الاحترافي للزيوت والشحوم الصناعية لمختلف الاستخدامات، مع خدمات استشارية عند الحاجة.",
    }
    ActivitiesCapabilitiesMonitoringTitle => "activities.capabilities.monitoring.title" {
        en: "Smart Monitoring",
        ar: "المراقبة الذكية",
    }
    ActivitiesCapabilitiesMonitoringDesc => "activities.capabilities.monitoring.desc" {
        en: "Continuous shipment monitoring and storage oversight using smart systems and real-time reporting.",
        ar: "متابعة مستمرة للشحنات ومراقبة عمليات التخزين عبر أنظمة ذكية وتقارير لحظية.",
    }
    ActivitiesCapabilitiesSafetyTitle => "activities.capabilities.safety.title" {
        en: "Safety Commitment",
        ar: "الالتزام بالسلامة",
    }
    ActivitiesCapabilitiesSafetyDesc => "activities.capabilities.safety.desc" {
        en: "Full compliance with safety protocols to protect personnel, assets, and the environment during storage and transport.",
        ar: "التقيد الكامل بتعليمات السلامة لحماية الأفراد والممتلكات والبيئة خلال التخزين والنقل.",
    }
    ActivitiesCtaTitle => "activities.cta.title" {
        en: "Leadership in Storage, Transport, and Consulting Services",
        ar: "الريادة في التخزين والنقل والخدمات الاستشارية",
    }
    ActivitiesCtaText => "activities.cta.text" {
        en: "At Petra, we believe that safe storage and transport of petroleum products is a major responsibility. We continuously invest in fleet upgrades, workforce development, and technology to ensure top performance and long-term reliability.",
        ar: "في بيترا، نؤمن بأن تقديم حلول تخزين ونقل آمنة للمشتقات النفطية هو مسؤولية كبيرة، لذلك نواصل الاستثمار في تطوير الأسطول، تأهيل الكوادر، واعتماد أحدث التقنيات لضمان أفضل أداء وموثوقية على المدى الطويل.",
    }
    ActivitiesCtaButton => "activities.cta.button" {
        en: "Contact Us",
        ar: "تواصل معنا",
    }
    ActivitiesCtaSignature => "activities.cta.signature" {
        en: "Petra – Your Trusted Partner in Storage, Transport, and Consulting Services",
        ar: "بيترا – شريككم الموثوق في حلول التخزين والنقل والخدمات الاستشارية",
    }

    ContactHeroLabel => "contact.hero.label" {
        en: "Petra",
        ar: "بيترا",
    }
    ContactHeroTitle => "contact.hero.title" {
        en: "Contact Us",
        ar: "تواصل معنا",
    }
    ContactHeroSubtitle => "contact.hero.subtitle" {
        en: "Get in Touch with Petra",
        ar: "تواصل مع شركة بيترا",
    }
    ContactHeroDescription => "contact.hero.description" {
        en: "At Petra Company, we believe in building lasting relationships with our clients. Our dedicated team is here to assist you with any inquiries, partnerships, or business opportunities. We look forward to connecting with you.",
        ar: "في شركة بيترا، نؤمن ببناء علاقات طويلة الأمد مع عملائنا. فريقنا المتخصص جاهز لمساعدتك في أي استفسارات أو شراكات أو فرص عمل. نتطلع دائمًا للتواصل معك.",
    }

    CommonScrollDown => "common.scrollDown" {
        en: "Scroll Down",
        ar: "تصفح لأسفل",
    }

    ContactInfoPhone => "contact.info.phone" {
        en: "Phone",
        ar: "الهاتف",
    }
    ContactInfoPhoneValue1 => "contact.info.phoneValue1" {
        en: "+963 11 691 55 44",
        ar: "+963 11 691 55 44",
    }
    ContactInfoPhoneValue2 => "contact.info.phoneValue2" {
        en: "+963 11 692 63 62",
        ar: "+963 11 692 63 62",
    }
    ContactInfoEmail => "contact.info.email" {
        en: "Email",
        ar: "البريد الإلكتروني",
    }
    ContactInfoEmailValue1 => "contact.info.emailValue1" {
        en: "info@petra-co.com.sy",
        ar: "info@petra-co.com.sy",
    }
    ContactInfoEmailValue2 => "contact.info.emailValue2" {
        en: "petra-co@outlook.com",
        ar: "petra-co@outlook.com",
    }
    ContactInfoMobile => "contact.info.mobile" {
        en: "Mobile",
        ar: "الجوال",
    }
    ContactInfoMobileValue => "contact.info.mobileValue" {
        en: "+963 934 039 444",
        ar: "+963 934 039 444",
    }
    ContactInfoFax => "contact.info.fax" {
        en: "Fax",
        ar: "الفاكس",
    }
    ContactInfoFaxValue => "contact.info.faxValue" {
        en: "+963 11 692 63 62",
        ar: "+963 11 692 63 62",
    }
    ContactInfoAddress => "contact.info.address" {
        en: "Address",
        ar: "العنوان",
    }
    ContactInfoAddressValue => "contact.info.addressValue" {
        en: "Damascus, Syria",
        ar: "دمشق، سوريا",
    }
    ContactHoursTitle => "contact.hours.title" {
        en: "Business Hours",
        ar: "ساعات العمل",
    }
    ContactHoursLabel => "contact.hours.label" {
        en: "Working Days",
        ar: "أيام الدوام",
    }
    ContactHoursWeekdays => "contact.hours.weekdays" {
        en: "Sunday - Thursday",
        ar: "من الأحد إلى الخميس",
    }
    ContactHoursTimeLabel => "contact.hours.timeLabel" {
        en: "Hours",
        ar: "ساعات الدوام",
    }
    ContactHoursTime => "contact.hours.time" {
        en: "8:00 AM - 5:00 PM",
        ar: "8:00 صباحًا - 5:00 مساءً",
    }
    ContactHoursClosed => "contact.hours.closed" {
        en: "Closed on Friday and Saturday",
        ar: "مغلق يومي الجمعة والسبت",
    }
    ContactLocationTitle => "contact.location.title" {
        en: "location",
        ar: "الموقع",
    }
    ContactMapViewLarger => "contact.map.viewLarger" {
        en: "View larger map",
        ar: "عرض الخريطة بحجم أكبر",
    }

    NotFoundTitle => "notFound.title" {
        en: "Page Not Found",
        ar: "الصفحة غير موجودة",
    }
    NotFoundDescription => "notFound.description" {
        en: "The page you are looking for doesn't exist or has been moved.",
        ar: "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",
    }
    NotFoundBack => "notFound.back" {
        en: "Return to Home",
        ar: "العودة إلى الرئيسية",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_variant_once() {
        let mut keys: Vec<&str> = Key::ALL.iter().map(|key| key.as_str()).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_panel_title_in_both_languages() {
        assert_eq!(Key::PanelTitle.text(Language::English), "Discover Petra");
        assert_eq!(Key::PanelTitle.text(Language::Arabic), "اكتشف بترا");
    }

    #[test]
    fn test_language_toggle_label_names_the_other_language() {
        assert_eq!(Key::NavLanguage.text(Language::English), "العربية");
        assert_eq!(Key::NavLanguage.text(Language::Arabic), "English");
    }

    #[test]
    fn test_contact_form_keys_are_translated() {
        assert_eq!(Key::ContactTitle.text(Language::English), "Get In Touch");
        assert_eq!(Key::ContactTitle.text(Language::Arabic), "تواصل معنا");
        assert_ne!(
            Key::ContactFormSubmit.text(Language::English),
            Key::ContactFormSubmit.text(Language::Arabic)
        );
    }

    #[test]
    fn test_as_str_is_dotted() {
        assert_eq!(Key::NavHome.as_str(), "nav.home");
        assert_eq!(Key::SafetySystemsTitle.as_str(), "safetySystems.title");
        assert_eq!(Key::Timeline2019.as_str(), "timeline.2019");
    }
}
