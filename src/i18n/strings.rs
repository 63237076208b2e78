/// All localized user-facing strings for a language.
///
/// Strings are stored raw; templates escape them on output. Placeholders in
/// braces (`{name}`, `{count}`) are filled with [`fill`].
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Chrome ====================
    pub brand_name: &'static str,
    pub tagline: &'static str,
    pub nav_home: &'static str,
    pub nav_yachts: &'static str,
    pub nav_locations: &'static str,
    pub nav_articles: &'static str,
    pub nav_admin: &'static str,
    pub sign_out: &'static str,
    pub footer_description: &'static str,
    pub footer_contact: &'static str,
    pub footer_quick_links: &'static str,
    pub footer_rights: &'static str,

    // ==================== Home ====================
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub explore_yachts: &'static str,
    pub browse_locations: &'static str,
    pub featured_yachts: &'static str,
    pub featured_yachts_desc: &'static str,
    pub no_featured_yachts: &'static str,
    pub view_all_yachts: &'static str,
    pub prime_locations: &'static str,
    pub prime_locations_desc: &'static str,
    pub no_locations: &'static str,
    pub view_all_locations: &'static str,

    // ==================== Cards ====================
    pub featured_badge: &'static str,
    pub view_details: &'static str,
    pub explore_location: &'static str,
    /// Placeholders: {count}
    pub yacht_count: &'static str,
    pub read_more: &'static str,

    // ==================== Yachts ====================
    pub all_yachts: &'static str,
    pub browse_yachts: &'static str,
    pub search_yachts: &'static str,
    pub all_locations: &'static str,
    pub filter_location: &'static str,
    pub search_button: &'static str,
    /// Placeholders: {count}
    pub showing_yachts: &'static str,
    pub no_yachts_found: &'static str,
    pub yacht_not_found: &'static str,
    pub back_to_yachts: &'static str,
    pub description: &'static str,
    pub features: &'static str,
    pub location: &'static str,
    pub view_on_map: &'static str,
    pub contact: &'static str,
    pub whatsapp: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub price: &'static str,
    pub per_booking: &'static str,
    pub price_on_request: &'static str,
    pub view_location_details: &'static str,

    // ==================== Locations ====================
    pub locations_title: &'static str,
    pub locations_desc: &'static str,
    pub search_locations: &'static str,
    /// Placeholders: {count}
    pub showing_locations: &'static str,
    pub no_locations_found: &'static str,
    pub location_not_found: &'static str,
    pub back_to_locations: &'static str,
    /// Placeholders: {name}
    pub yachts_in_location: &'static str,
    pub no_yachts_in_location: &'static str,
    pub browse_all_yachts: &'static str,

    // ==================== Articles ====================
    pub articles_title: &'static str,
    pub articles_desc: &'static str,
    pub search_articles: &'static str,
    /// Placeholders: {shown}, {total}
    pub showing_articles: &'static str,
    pub no_articles_found: &'static str,
    pub clear_search: &'static str,
    pub article_not_found: &'static str,
    pub back_to_articles: &'static str,

    // ==================== Errors ====================
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub error_title: &'static str,
    pub error_body: &'static str,
    pub back_home: &'static str,

    // ==================== Admin Login ====================
    pub admin_login: &'static str,
    pub email_label: &'static str,
    pub password_label: &'static str,
    pub sign_in: &'static str,
    pub admin_only: &'static str,
    pub login_error: &'static str,
    pub login_failed: &'static str,

    // ==================== Admin Panel ====================
    pub admin_panel: &'static str,
    pub manage_content: &'static str,
    pub add_yacht: &'static str,
    pub edit_yacht: &'static str,
    pub add_location: &'static str,
    pub edit_location: &'static str,
    pub add_article: &'static str,
    pub edit_article: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub cancel: &'static str,
    pub confirm_delete: &'static str,
    pub nothing_yet: &'static str,

    // ==================== Admin Form Labels ====================
    pub name_en_label: &'static str,
    pub name_ar_label: &'static str,
    pub description_en_label: &'static str,
    pub description_ar_label: &'static str,
    pub features_en_label: &'static str,
    pub features_ar_label: &'static str,
    pub price_label: &'static str,
    pub currency_label: &'static str,
    pub location_label: &'static str,
    pub no_location: &'static str,
    pub featured_label: &'static str,
    pub contact_whatsapp_label: &'static str,
    pub contact_phone_label: &'static str,
    pub contact_email_label: &'static str,
    pub map_link_label: &'static str,
    pub images_label: &'static str,
    pub current_images: &'static str,
    pub primary_badge: &'static str,
    pub make_primary: &'static str,
    pub remove_image: &'static str,
    pub title_en_label: &'static str,
    pub title_ar_label: &'static str,
    pub content_en_label: &'static str,
    pub content_ar_label: &'static str,
    pub image_url_label: &'static str,
    pub image_file_label: &'static str,
    pub latitude_label: &'static str,
    pub longitude_label: &'static str,

    // ==================== Admin Notices ====================
    pub yacht_saved: &'static str,
    pub yacht_deleted: &'static str,
    pub location_saved: &'static str,
    pub location_deleted: &'static str,
    pub article_saved: &'static str,
    pub article_deleted: &'static str,
    pub image_updated: &'static str,
    pub error_saving_yacht: &'static str,
    pub error_saving_location: &'static str,
    pub error_saving_article: &'static str,
    pub error_deleting: &'static str,
    /// Placeholders: {count}
    pub images_failed: &'static str,
    pub required_fields: &'static str,
    pub invalid_price: &'static str,
    pub invalid_coordinates: &'static str,
    pub invalid_map_link: &'static str,
    pub invalid_location: &'static str,
    pub session_expired: &'static str,

    // ==================== Contact Messages ====================
    /// Placeholders: {name}
    pub whatsapp_message: &'static str,
    /// Placeholders: {name}
    pub email_subject: &'static str,
    /// Placeholders: {name}
    pub email_body: &'static str,
    pub general_inquiry: &'static str,

    // ==================== Dates ====================
    pub months: [&'static str; 12],
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // Chrome
    brand_name: "ELSOKHNA",
    tagline: "Luxury Yacht Booking",
    nav_home: "Home",
    nav_yachts: "Yachts",
    nav_locations: "Locations",
    nav_articles: "Articles",
    nav_admin: "Admin",
    sign_out: "Sign Out",
    footer_description: "Premium yacht rental experiences in the most beautiful locations.",
    footer_contact: "Contact Us",
    footer_quick_links: "Quick Links",
    footer_rights: "All rights reserved.",

    // Home
    hero_title: "Luxury Yacht Experiences",
    hero_subtitle: "Discover the most beautiful yachts in the most exclusive locations",
    explore_yachts: "Explore Yachts",
    browse_locations: "Browse Locations",
    featured_yachts: "Featured Yachts",
    featured_yachts_desc: "Our handpicked selection of the finest luxury yachts",
    no_featured_yachts: "No featured yachts available at the moment.",
    view_all_yachts: "View All Yachts",
    prime_locations: "Prime Locations",
    prime_locations_desc: "Explore breathtaking destinations where luxury meets adventure",
    no_locations: "No locations available at the moment.",
    view_all_locations: "View All Locations",

    // Cards
    featured_badge: "Featured",
    view_details: "View Details",
    explore_location: "Explore Location",
    yacht_count: "{count} Yachts",
    read_more: "Read More",

    // Yachts
    all_yachts: "All Yachts",
    browse_yachts: "Browse our complete collection of luxury yachts",
    search_yachts: "Search yachts...",
    all_locations: "All Locations",
    filter_location: "Filter by location",
    search_button: "Search",
    showing_yachts: "Showing {count} yacht(s)",
    no_yachts_found: "No yachts found matching your criteria.",
    yacht_not_found: "Yacht not found",
    back_to_yachts: "Back to Yachts",
    description: "Description",
    features: "Features",
    location: "Location",
    view_on_map: "View on Map",
    contact: "Contact",
    whatsapp: "WhatsApp",
    phone: "Phone",
    email: "Email",
    price: "Price",
    per_booking: "per booking",
    price_on_request: "Price on request",
    view_location_details: "View Location Details",

    // Locations
    locations_title: "Our Locations",
    locations_desc: "Discover the destinations where our yachts are waiting for you",
    search_locations: "Search locations...",
    showing_locations: "Showing {count} location(s)",
    no_locations_found: "No locations found matching your search.",
    location_not_found: "Location not found",
    back_to_locations: "Back to Locations",
    yachts_in_location: "Yachts in {name}",
    no_yachts_in_location: "No yachts available in this location at the moment.",
    browse_all_yachts: "Browse All Yachts",

    // Articles
    articles_title: "Articles",
    articles_desc: "Discover insights, tips, and stories about luxury yacht experiences",
    search_articles: "Search articles...",
    showing_articles: "Showing {shown} of {total} articles",
    no_articles_found: "No articles found",
    clear_search: "Clear Search",
    article_not_found: "Article not found",
    back_to_articles: "Back to Articles",

    // Errors
    not_found_title: "Page not found",
    not_found_body: "The page you are looking for does not exist.",
    error_title: "Something went wrong",
    error_body: "We could not complete your request. Please try again later.",
    back_home: "Back to Home",

    // Admin login
    admin_login: "Admin Login",
    email_label: "Email",
    password_label: "Password",
    sign_in: "Sign In",
    admin_only: "Admin access only",
    login_error: "Invalid email or password",
    login_failed: "Login failed. Please try again.",

    // Admin panel
    admin_panel: "Admin Panel",
    manage_content: "Manage your yacht, location and article content",
    add_yacht: "Add New Yacht",
    edit_yacht: "Edit Yacht",
    add_location: "Add New Location",
    edit_location: "Edit Location",
    add_article: "Add New Article",
    edit_article: "Edit Article",
    edit: "Edit",
    delete: "Delete",
    create: "Create",
    update: "Update",
    cancel: "Cancel",
    confirm_delete: "Are you sure you want to delete this item?",
    nothing_yet: "Nothing here yet.",

    // Admin form labels
    name_en_label: "Name (English)",
    name_ar_label: "Name (Arabic)",
    description_en_label: "Description (English)",
    description_ar_label: "Description (Arabic)",
    features_en_label: "Features (English, comma separated)",
    features_ar_label: "Features (Arabic, comma separated)",
    price_label: "Price",
    currency_label: "Currency",
    location_label: "Location",
    no_location: "No location",
    featured_label: "Featured yacht",
    contact_whatsapp_label: "WhatsApp number",
    contact_phone_label: "Phone number",
    contact_email_label: "Contact email",
    map_link_label: "Google Maps link",
    images_label: "Upload images",
    current_images: "Current images",
    primary_badge: "Primary",
    make_primary: "Make primary",
    remove_image: "Remove",
    title_en_label: "Title (English)",
    title_ar_label: "Title (Arabic)",
    content_en_label: "Content (English)",
    content_ar_label: "Content (Arabic)",
    image_url_label: "Image URL",
    image_file_label: "Main image",
    latitude_label: "Latitude",
    longitude_label: "Longitude",

    // Admin notices
    yacht_saved: "Yacht saved successfully",
    yacht_deleted: "Yacht deleted successfully",
    location_saved: "Location saved successfully",
    location_deleted: "Location deleted successfully",
    article_saved: "Article saved successfully",
    article_deleted: "Article deleted successfully",
    image_updated: "Images updated successfully",
    error_saving_yacht: "Error saving yacht",
    error_saving_location: "Error saving location",
    error_saving_article: "Error saving article",
    error_deleting: "Error deleting item",
    images_failed: "{count} image(s) failed to upload",
    required_fields: "Please fill in all required fields",
    invalid_price: "Price must be a non-negative number",
    invalid_coordinates: "Latitude and longitude must both be valid numbers",
    invalid_map_link: "Map link must start with http:// or https://",
    invalid_location: "Please choose a valid location",
    session_expired: "Your session has expired. Please reload the form and try again.",

    // Contact messages
    whatsapp_message: "Hi! I'm interested in booking the {name} yacht. Can you provide more details?",
    email_subject: "Yacht Booking Inquiry - {name}",
    email_body: "Hi,\n\nI'm interested in booking the {name} yacht. Please provide more details and availability.\n\nThank you!",
    general_inquiry: "Hi! I'd like to know more about your yacht rentals.",

    // Dates
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
};

// ==================== Arabic Strings ====================

/// Arabic language strings
pub const ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    // Chrome
    brand_name: "السخنة",
    tagline: "حجز اليخوت الفاخرة",
    nav_home: "الرئيسية",
    nav_yachts: "اليخوت",
    nav_locations: "المواقع",
    nav_articles: "المقالات",
    nav_admin: "الإدارة",
    sign_out: "تسجيل الخروج",
    footer_description: "تجارب فاخرة لاستئجار اليخوت في أجمل المواقع.",
    footer_contact: "اتصل بنا",
    footer_quick_links: "روابط سريعة",
    footer_rights: "جميع الحقوق محفوظة.",

    // Home
    hero_title: "تجارب يخوت فاخرة",
    hero_subtitle: "اكتشف أجمل اليخوت في أكثر الأماكن حصرية",
    explore_yachts: "استكشف اليخوت",
    browse_locations: "تصفح المواقع",
    featured_yachts: "اليخوت المميزة",
    featured_yachts_desc: "مجموعتنا المختارة بعناية من أفخر اليخوت الفاخرة",
    no_featured_yachts: "لا توجد يخوت مميزة متاحة في الوقت الحالي.",
    view_all_yachts: "عرض جميع اليخوت",
    prime_locations: "مواقع متميزة",
    prime_locations_desc: "استكشف وجهات خلابة حيث تلتقي الفخامة بالمغامرة",
    no_locations: "لا توجد مواقع متاحة في الوقت الحالي.",
    view_all_locations: "عرض جميع المواقع",

    // Cards
    featured_badge: "مميز",
    view_details: "عرض التفاصيل",
    explore_location: "استكشاف الموقع",
    yacht_count: "{count} يخت",
    read_more: "اقرأ المزيد",

    // Yachts
    all_yachts: "جميع اليخوت",
    browse_yachts: "تصفح مجموعتنا الكاملة من اليخوت الفاخرة",
    search_yachts: "البحث في اليخوت...",
    all_locations: "جميع المواقع",
    filter_location: "تصفية حسب الموقع",
    search_button: "بحث",
    showing_yachts: "عرض {count} يخت",
    no_yachts_found: "لم يتم العثور على يخوت تطابق معاييرك.",
    yacht_not_found: "اليخت غير موجود",
    back_to_yachts: "العودة إلى اليخوت",
    description: "الوصف",
    features: "المميزات",
    location: "الموقع",
    view_on_map: "عرض على الخريطة",
    contact: "اتصل بنا",
    whatsapp: "واتساب",
    phone: "الهاتف",
    email: "البريد الإلكتروني",
    price: "السعر",
    per_booking: "للحجز الواحد",
    price_on_request: "السعر عند الطلب",
    view_location_details: "عرض تفاصيل الموقع",

    // Locations
    locations_title: "مواقعنا",
    locations_desc: "اكتشف الوجهات التي تنتظرك فيها يخوتنا",
    search_locations: "البحث في المواقع...",
    showing_locations: "عرض {count} موقع",
    no_locations_found: "لم يتم العثور على مواقع تطابق بحثك.",
    location_not_found: "الموقع غير موجود",
    back_to_locations: "العودة إلى المواقع",
    yachts_in_location: "اليخوت في {name}",
    no_yachts_in_location: "لا توجد يخوت متاحة في هذا الموقع في الوقت الحالي.",
    browse_all_yachts: "تصفح جميع اليخوت",

    // Articles
    articles_title: "المقالات",
    articles_desc: "اكتشف رؤى ونصائح وقصص حول تجارب اليخوت الفاخرة",
    search_articles: "البحث في المقالات...",
    showing_articles: "عرض {shown} من {total} مقال",
    no_articles_found: "لم يتم العثور على مقالات",
    clear_search: "مسح البحث",
    article_not_found: "المقال غير موجود",
    back_to_articles: "العودة إلى المقالات",

    // Errors
    not_found_title: "الصفحة غير موجودة",
    not_found_body: "الصفحة التي تبحث عنها غير موجودة.",
    error_title: "حدث خطأ ما",
    error_body: "تعذر إكمال طلبك. يرجى المحاولة مرة أخرى لاحقاً.",
    back_home: "العودة إلى الرئيسية",

    // Admin login
    admin_login: "تسجيل دخول المدير",
    email_label: "البريد الإلكتروني",
    password_label: "كلمة المرور",
    sign_in: "تسجيل الدخول",
    admin_only: "للمديرين فقط",
    login_error: "البريد الإلكتروني أو كلمة المرور غير صحيحة",
    login_failed: "فشل تسجيل الدخول. يرجى المحاولة مرة أخرى.",

    // Admin panel
    admin_panel: "لوحة الإدارة",
    manage_content: "إدارة محتوى اليخوت والمواقع والمقالات",
    add_yacht: "إضافة يخت جديد",
    edit_yacht: "تعديل اليخت",
    add_location: "إضافة موقع جديد",
    edit_location: "تعديل الموقع",
    add_article: "إضافة مقال جديد",
    edit_article: "تعديل المقال",
    edit: "تعديل",
    delete: "حذف",
    create: "إنشاء",
    update: "تحديث",
    cancel: "إلغاء",
    confirm_delete: "هل أنت متأكد من الحذف؟",
    nothing_yet: "لا يوجد شيء هنا بعد.",

    // Admin form labels
    name_en_label: "الاسم (بالإنجليزية)",
    name_ar_label: "الاسم (بالعربية)",
    description_en_label: "الوصف (بالإنجليزية)",
    description_ar_label: "الوصف (بالعربية)",
    features_en_label: "المميزات (بالإنجليزية، مفصولة بفواصل)",
    features_ar_label: "المميزات (بالعربية، مفصولة بفواصل)",
    price_label: "السعر",
    currency_label: "العملة",
    location_label: "الموقع",
    no_location: "بدون موقع",
    featured_label: "يخت مميز",
    contact_whatsapp_label: "رقم واتساب",
    contact_phone_label: "رقم الهاتف",
    contact_email_label: "البريد الإلكتروني للتواصل",
    map_link_label: "رابط خرائط جوجل",
    images_label: "رفع الصور",
    current_images: "الصور الحالية",
    primary_badge: "رئيسية",
    make_primary: "تعيين كصورة رئيسية",
    remove_image: "إزالة",
    title_en_label: "العنوان (بالإنجليزية)",
    title_ar_label: "العنوان (بالعربية)",
    content_en_label: "المحتوى (بالإنجليزية)",
    content_ar_label: "المحتوى (بالعربية)",
    image_url_label: "رابط الصورة",
    image_file_label: "الصورة الرئيسية",
    latitude_label: "خط العرض",
    longitude_label: "خط الطول",

    // Admin notices
    yacht_saved: "تم حفظ اليخت بنجاح",
    yacht_deleted: "تم حذف اليخت بنجاح",
    location_saved: "تم حفظ الموقع بنجاح",
    location_deleted: "تم حذف الموقع بنجاح",
    article_saved: "تم حفظ المقال بنجاح",
    article_deleted: "تم حذف المقال بنجاح",
    image_updated: "تم تحديث الصور بنجاح",
    error_saving_yacht: "خطأ في حفظ اليخت",
    error_saving_location: "خطأ في حفظ الموقع",
    error_saving_article: "خطأ في حفظ المقال",
    error_deleting: "خطأ في الحذف",
    images_failed: "فشل رفع {count} صورة",
    required_fields: "يرجى ملء جميع الحقول المطلوبة",
    invalid_price: "يجب أن يكون السعر رقماً غير سالب",
    invalid_coordinates: "يجب أن يكون خط العرض وخط الطول رقمين صحيحين",
    invalid_map_link: "يجب أن يبدأ رابط الخريطة بـ http:// أو https://",
    invalid_location: "يرجى اختيار موقع صحيح",
    session_expired: "انتهت صلاحية الجلسة. يرجى إعادة تحميل النموذج والمحاولة مرة أخرى.",

    // Contact messages
    whatsapp_message: "مرحباً! أنا مهتم بحجز اليخت {name}. هل يمكنكم تزويدي بمزيد من التفاصيل؟",
    email_subject: "استفسار عن حجز يخت - {name}",
    email_body: "مرحباً،\n\nأنا مهتم بحجز اليخت {name}. يرجى تزويدي بمزيد من التفاصيل ومواعيد التوفر.\n\nشكراً لكم!",
    general_inquiry: "مرحباً! أود معرفة المزيد عن تأجير اليخوت لديكم.",

    // Dates
    months: [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس",
        "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
    ],
};

/// Replace `{key}` placeholders in a localized template.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{}}}", key), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_all_placeholders() {
        let out = fill("Showing {shown} of {total} articles", &[("shown", "2"), ("total", "5")]);
        assert_eq!(out, "Showing 2 of 5 articles");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("Yachts in {name}", &[("count", "3")]), "Yachts in {name}");
    }

    #[test]
    fn test_fill_arabic_template() {
        let out = fill(ARABIC_STRINGS.yachts_in_location, &[("name", "العين السخنة")]);
        assert_eq!(out, "اليخوت في العين السخنة");
    }

    #[test]
    fn test_contact_templates_carry_name_placeholder() {
        for strings in [&ENGLISH_STRINGS, &ARABIC_STRINGS] {
            assert!(strings.whatsapp_message.contains("{name}"));
            assert!(strings.email_subject.contains("{name}"));
            assert!(strings.email_body.contains("{name}"));
        }
    }

    #[test]
    fn test_month_tables_are_distinct_per_language() {
        assert_eq!(ENGLISH_STRINGS.months[0], "January");
        assert_eq!(ARABIC_STRINGS.months[11], "ديسمبر");
    }
}
