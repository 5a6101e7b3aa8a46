/// A single form field edit, carrying the raw input value. Numeric and date
/// fields arrive as strings straight from the DOM and are parsed in
/// `update`; anything unparseable leaves the field absent in the draft.
pub enum FieldEdit {
    RecipientName(String),
    Amount(String),
    Message(String),
    ExpirationDate(String),
    VoucherCode(String),
    HotelName(String),
    RepresentativeTitle(String),
    RepresentativeName(String),
    RoomName(String),
    BoardName(String),
    Adults(String),
    Children(String),
    IssuerName(String),
    IssueDate(String),
    HotelAddress(String),
    HotelPhoneNumber(String),
    HotelEmail(String),
    WebsiteUrl(String),
}

pub enum Msg {
    Edit(FieldEdit),
    LogoPicked(Option<web_sys::File>),
    LogoEncoded(String),
    ClearLogo,
    SaveDefaults,
}
