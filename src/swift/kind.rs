use strum_macros::{EnumCount, EnumIter};

/// The tag of a [`Node`](super::Node).
///
/// This is a closed set: every tag the demangler can produce has exactly one case here, and both the type classifier
/// and the printer match on it exhaustively.
#[expect(missing_docs, reason = "variant names follow the demangler's node grammar")]
#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    AccessorFunctionReference,
    Allocator,
    AnonymousContext,
    AnonymousDescriptor,
    AnyProtocolConformanceList,
    ArgumentTuple,
    AssocTypePath,
    AssociatedConformanceDescriptor,
    AssociatedType,
    AssociatedTypeDescriptor,
    AssociatedTypeGenericParamRef,
    AssociatedTypeMetadataAccessor,
    AssociatedTypeRef,
    AssociatedTypeWitnessTableAccessor,
    AsyncAnnotation,
    AutoClosureType,
    BaseConformanceDescriptor,
    BaseWitnessTableAccessor,
    BoundGenericClass,
    BoundGenericEnum,
    BoundGenericFunction,
    BoundGenericOtherNominalType,
    BoundGenericProtocol,
    BoundGenericStructure,
    BoundGenericTypeAlias,
    BuiltinTypeName,
    CFunctionPointer,
    CanonicalPrespecializedGenericTypeCachingOnceToken,
    CanonicalSpecializedGenericMetaclass,
    CanonicalSpecializedGenericTypeMetadataAccessFunction,
    ClangType,
    Class,
    ClassMetadataBaseOffset,
    ConcreteProtocolConformance,
    Constructor,
    CoroutineContinuationPrototype,
    CurryThunk,
    Deallocator,
    DeclContext,
    DefaultArgumentInitializer,
    DefaultAssociatedConformanceAccessor,
    DefaultAssociatedTypeMetadataAccessor,
    DependentAssociatedConformance,
    DependentAssociatedTypeRef,
    DependentGenericConformanceRequirement,
    DependentGenericLayoutRequirement,
    DependentGenericParamCount,
    DependentGenericParamType,
    DependentGenericSameTypeRequirement,
    DependentGenericSignature,
    DependentGenericType,
    DependentMemberType,
    DependentProtocolConformanceAssociated,
    DependentProtocolConformanceInherited,
    DependentProtocolConformanceRoot,
    DependentPseudogenericSignature,
    Destructor,
    DidSet,
    DifferentiableFunctionType,
    DirectMethodReferenceAttribute,
    Directness,
    DispatchThunk,
    DynamicAttribute,
    DynamicSelf,
    DynamicallyReplaceableFunctionImpl,
    DynamicallyReplaceableFunctionKey,
    DynamicallyReplaceableFunctionVar,
    EmptyList,
    Enum,
    EnumCase,
    ErrorType,
    EscapingAutoClosureType,
    EscapingDifferentiableFunctionType,
    EscapingLinearFunctionType,
    EscapingObjCBlock,
    ExistentialMetatype,
    ExplicitClosure,
    Extension,
    ExtensionDescriptor,
    FieldOffset,
    FirstElementMarker,
    FullObjCResilientClassStub,
    FullTypeMetadata,
    Function,
    FunctionSignatureSpecialization,
    FunctionSignatureSpecializationParam,
    FunctionSignatureSpecializationParamKind,
    FunctionSignatureSpecializationParamPayload,
    FunctionSignatureSpecializationReturn,
    FunctionType,
    GenericPartialSpecialization,
    GenericPartialSpecializationNotReAbstracted,
    GenericProtocolWitnessTable,
    GenericProtocolWitnessTableInstantiationFunction,
    GenericSpecialization,
    GenericSpecializationNotReAbstracted,
    GenericSpecializationParam,
    GenericSpecializationPrespecialized,
    GenericTypeMetadataPattern,
    GenericTypeParamDecl,
    Getter,
    Global,
    GlobalGetter,
    GlobalVariableOnceDeclList,
    GlobalVariableOnceFunction,
    GlobalVariableOnceToken,
    IVarDestroyer,
    IVarInitializer,
    Identifier,
    ImplConvention,
    ImplDifferentiability,
    ImplDifferentiable,
    ImplErrorResult,
    ImplEscaping,
    ImplFunctionAttribute,
    ImplFunctionConvention,
    ImplFunctionConventionName,
    ImplFunctionType,
    ImplInvocationSubstitutions,
    ImplLinear,
    ImplParameter,
    ImplPatternSubstitutions,
    ImplResult,
    ImplYield,
    ImplicitClosure,
    InOut,
    Index,
    InfixOperator,
    Initializer,
    InlinedGenericFunction,
    IsSerialized,
    KeyPathEqualsThunkHelper,
    KeyPathGetterThunkHelper,
    KeyPathHashThunkHelper,
    KeyPathSetterThunkHelper,
    LabelList,
    LazyProtocolWitnessTableAccessor,
    LazyProtocolWitnessTableCacheVariable,
    LinearFunctionType,
    LocalDeclName,
    MaterializeForSet,
    MergedFunction,
    Metaclass,
    MetadataInstantiationCache,
    Metatype,
    MetatypeRepresentation,
    MethodDescriptor,
    MethodLookupFunction,
    ModifyAccessor,
    Module,
    ModuleDescriptor,
    NativeOwningAddressor,
    NativeOwningMutableAddressor,
    NativePinningAddressor,
    NativePinningMutableAddressor,
    NoEscapeFunctionType,
    NominalTypeDescriptor,
    NonObjCAttribute,
    NoncanonicalSpecializedGenericTypeMetadata,
    NoncanonicalSpecializedGenericTypeMetadataCache,
    Number,
    ObjCAsyncCompletionHandlerImpl,
    ObjCAttribute,
    ObjCBlock,
    ObjCMetadataUpdateFunction,
    ObjCResilientClassStub,
    OpaqueReturnType,
    OpaqueReturnTypeOf,
    OpaqueType,
    OpaqueTypeDescriptor,
    OpaqueTypeDescriptorAccessor,
    OpaqueTypeDescriptorAccessorImpl,
    OpaqueTypeDescriptorAccessorKey,
    OpaqueTypeDescriptorAccessorVar,
    OpaqueTypeDescriptorSymbolicReference,
    OtherNominalType,
    OutlinedAssignWithCopy,
    OutlinedAssignWithTake,
    OutlinedBridgedMethod,
    OutlinedConsume,
    OutlinedCopy,
    OutlinedDestroy,
    OutlinedInitializeWithCopy,
    OutlinedInitializeWithTake,
    OutlinedRelease,
    OutlinedRetain,
    OutlinedVariable,
    Owned,
    OwningAddressor,
    OwningMutableAddressor,
    PartialApplyForwarder,
    PartialApplyObjCForwarder,
    PostfixOperator,
    PrefixOperator,
    PrivateDeclName,
    PropertyDescriptor,
    PropertyWrapperBackingInitializer,
    Protocol,
    ProtocolConformance,
    ProtocolConformanceDescriptor,
    ProtocolConformanceRefInOtherModule,
    ProtocolConformanceRefInProtocolModule,
    ProtocolConformanceRefInTypeModule,
    ProtocolDescriptor,
    ProtocolList,
    ProtocolListWithAnyObject,
    ProtocolListWithClass,
    ProtocolRequirementsBaseDescriptor,
    ProtocolSelfConformanceDescriptor,
    ProtocolSelfConformanceWitness,
    ProtocolSelfConformanceWitnessTable,
    ProtocolSymbolicReference,
    ProtocolWitness,
    ProtocolWitnessTable,
    ProtocolWitnessTableAccessor,
    ProtocolWitnessTablePattern,
    ReabstractionThunk,
    ReabstractionThunkHelper,
    ReabstractionThunkHelperWithSelf,
    ReadAccessor,
    ReflectionMetadataAssocTypeDescriptor,
    ReflectionMetadataBuiltinDescriptor,
    ReflectionMetadataFieldDescriptor,
    ReflectionMetadataSuperclassDescriptor,
    RelatedEntityDeclName,
    ResilientProtocolWitnessTable,
    RetroactiveConformance,
    ReturnType,
    SILBoxImmutableField,
    SILBoxLayout,
    SILBoxMutableField,
    SILBoxType,
    SILBoxTypeWithLayout,
    Setter,
    Shared,
    SpecializationPassID,
    Static,
    Structure,
    Subscript,
    Suffix,
    SugaredArray,
    SugaredDictionary,
    SugaredOptional,
    SugaredParen,
    ThinFunctionType,
    ThrowsAnnotation,
    Tuple,
    TupleElement,
    TupleElementName,
    Type,
    TypeAlias,
    TypeList,
    TypeMangling,
    TypeMetadata,
    TypeMetadataAccessFunction,
    TypeMetadataCompletionFunction,
    TypeMetadataDemanglingCache,
    TypeMetadataInstantiationCache,
    TypeMetadataInstantiationFunction,
    TypeMetadataLazyCache,
    TypeMetadataSingletonInitializationCache,
    TypeSymbolicReference,
    UncurriedFunctionType,
    UnknownIndex,
    Unmanaged,
    Unowned,
    UnsafeAddressor,
    UnsafeMutableAddressor,
    VTableAttribute,
    VTableThunk,
    ValueWitness,
    ValueWitnessTable,
    Variable,
    VariadicMarker,
    Weak,
    WillSet,
}
