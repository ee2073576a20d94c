use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization
    MissingAdminRole = 3,
    MissingFeeSetterRole = 4,

    // Preconditions
    Paused = 5,
    DomainNotAllowed = 6,
    AmountNotAboveFee = 7,
    LengthMismatch = 8,
    InvalidFee = 9,
    InvalidAmount = 10,
    UnsupportedSettlementToken = 11,
    OutputNotSettlementToken = 12,

    // Local swap
    InvalidRoute = 13,
    UnexpectedDelta = 14,
    InsufficientOutput = 15,

    // Relay
    UnsupportedDomain = 16,
    RemoteMessengerNotSet = 17,
    InvalidGasPayment = 18,

    // Remote execution
    NotGateway = 19,
    UnknownSource = 20,
    AlreadyExecuted = 21,
    InvalidPayload = 22,
    InsufficientSettlementBalance = 23,

    // Administration
    LocalDomain = 24,
}
