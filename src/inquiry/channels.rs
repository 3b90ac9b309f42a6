/// A direct way to reach the kitchen, listed beside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub label_key: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label_key: "contact.call",
        value: "+961 76 031 146",
        href: "tel:+96176031146",
    },
    ContactMethod {
        label_key: "contact.whatsapp",
        value: "+961 76 031 146",
        href: "https://wa.me/96176031146",
    },
    ContactMethod {
        label_key: "contact.instagram",
        value: "@set.elbeit_kitchen",
        href: "https://www.instagram.com/set.elbeit_kitchen",
    },
    ContactMethod {
        label_key: "contact.tiktok",
        value: "@mona.set.el_beit",
        href: "https://www.tiktok.com/@mona.set.el_beit",
    },
];
